pub use super::article::Entity as Article;
pub use super::bucket::Entity as Bucket;
pub use super::chatroom::Entity as Chatroom;
pub use super::chatroom_user::Entity as ChatroomUser;
pub use super::friend::Entity as Friend;
pub use super::message::Entity as Message;
pub use super::notification::Entity as Notification;
pub use super::organization::Entity as Organization;
pub use super::organization_user::Entity as OrganizationUser;
pub use super::preference::Entity as Preference;
pub use super::project::Entity as Project;
pub use super::project_user::Entity as ProjectUser;
pub use super::report::Entity as Report;
pub use super::suspension::Entity as Suspension;
pub use super::task::Entity as Task;
pub use super::task_user::Entity as TaskUser;
pub use super::user::Entity as User;
pub use super::user_preference::Entity as UserPreference;
