use axum::{
    routing::{delete, get, post, put},
    Json, Router,
};
use utoipa::OpenApi;

use crate::server::{
    controller::{
        article::{self, ARTICLE_TAG},
        auth::{self, AUTH_TAG},
        chatroom::{self, CHATROOM_TAG},
        friend::{self, FRIEND_TAG},
        notification::{self, NOTIFICATION_TAG},
        organization::{self, ORGANIZATION_TAG},
        project::{self, PROJECT_TAG},
        report::{self, REPORT_TAG},
        suspension::{self, SUSPENSION_TAG},
        task::{self, TASK_TAG},
        user::{self, USER_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Kolab", description = "Project collaboration API"),
    paths(
        auth::register,
        auth::login,
        auth::logout,
        auth::me,
        user::get_user,
        user::search_users,
        user::update_me,
        user::get_preferences,
        user::update_preferences,
        friend::get_friends,
        friend::get_friend_status,
        friend::add_friend,
        friend::accept_friend,
        friend::delete_friend,
        notification::get_notifications,
        notification::read_notification,
        notification::read_all_notifications,
        notification::delete_notification,
        organization::create_organization,
        organization::get_my_organizations,
        organization::get_organization,
        organization::update_organization,
        organization::delete_organization,
        organization::get_members,
        organization::invite_member,
        organization::accept_invite,
        organization::remove_member,
        organization::get_projects,
        project::create_project,
        project::get_project,
        project::update_project,
        project::delete_project,
        project::get_members,
        project::invite_member,
        project::accept_invite,
        project::remove_member,
        project::get_chatroom,
        project::create_bucket,
        project::get_buckets,
        project::rename_bucket,
        project::delete_bucket,
        task::create_task,
        task::get_tasks,
        task::get_task,
        task::update_task,
        task::delete_task,
        task::assign_task,
        task::unassign_task,
        chatroom::get_my_chatrooms,
        chatroom::open_private_chatroom,
        chatroom::get_messages,
        chatroom::send_message,
        report::create_report,
        report::get_reports,
        report::resolve_report,
        suspension::create_suspension,
        suspension::get_suspensions,
        suspension::get_active_suspension,
        suspension::update_suspension,
        suspension::delete_suspension,
        article::get_articles,
        article::get_article,
        article::create_article,
        article::update_article,
        article::delete_article,
    ),
    tags(
        (name = AUTH_TAG, description = "Registration and login"),
        (name = USER_TAG, description = "Profiles, search and preferences"),
        (name = FRIEND_TAG, description = "Friend requests and friendships"),
        (name = NOTIFICATION_TAG, description = "In-app notifications"),
        (name = ORGANIZATION_TAG, description = "Organizations and their members"),
        (name = PROJECT_TAG, description = "Projects, members and buckets"),
        (name = TASK_TAG, description = "Tasks, ordering and assignment"),
        (name = CHATROOM_TAG, description = "Project and private chat"),
        (name = REPORT_TAG, description = "User reports"),
        (name = SUSPENSION_TAG, description = "Account suspensions"),
        (name = ARTICLE_TAG, description = "Markdown articles"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        // auth
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        // users
        .route("/api/users", get(user::search_users))
        .route("/api/users/me", put(user::update_me))
        .route(
            "/api/users/me/preferences",
            get(user::get_preferences).put(user::update_preferences),
        )
        .route("/api/users/{user_id}", get(user::get_user))
        // friends
        .route("/api/friends", get(friend::get_friends))
        .route(
            "/api/friends/{user_id}",
            get(friend::get_friend_status)
                .post(friend::add_friend)
                .delete(friend::delete_friend),
        )
        .route("/api/friends/{user_id}/accept", post(friend::accept_friend))
        // notifications
        .route("/api/notifications", get(notification::get_notifications))
        .route(
            "/api/notifications/read",
            post(notification::read_all_notifications),
        )
        .route(
            "/api/notifications/{notification_id}",
            delete(notification::delete_notification),
        )
        .route(
            "/api/notifications/{notification_id}/read",
            post(notification::read_notification),
        )
        // organizations
        .route(
            "/api/organizations",
            get(organization::get_my_organizations).post(organization::create_organization),
        )
        .route(
            "/api/organizations/{org_id}",
            get(organization::get_organization)
                .put(organization::update_organization)
                .delete(organization::delete_organization),
        )
        .route(
            "/api/organizations/{org_id}/members",
            get(organization::get_members).post(organization::invite_member),
        )
        .route(
            "/api/organizations/{org_id}/members/{user_id}",
            delete(organization::remove_member),
        )
        .route(
            "/api/organizations/{org_id}/accept",
            post(organization::accept_invite),
        )
        .route(
            "/api/organizations/{org_id}/projects",
            get(organization::get_projects).post(project::create_project),
        )
        // projects
        .route(
            "/api/projects/{project_id}",
            get(project::get_project)
                .put(project::update_project)
                .delete(project::delete_project),
        )
        .route(
            "/api/projects/{project_id}/members",
            get(project::get_members).post(project::invite_member),
        )
        .route(
            "/api/projects/{project_id}/members/{user_id}",
            delete(project::remove_member),
        )
        .route("/api/projects/{project_id}/accept", post(project::accept_invite))
        .route("/api/projects/{project_id}/chatroom", get(project::get_chatroom))
        .route(
            "/api/projects/{project_id}/buckets",
            get(project::get_buckets).post(project::create_bucket),
        )
        // buckets & tasks
        .route(
            "/api/buckets/{bucket_id}",
            put(project::rename_bucket).delete(project::delete_bucket),
        )
        .route(
            "/api/buckets/{bucket_id}/tasks",
            get(task::get_tasks).post(task::create_task),
        )
        .route(
            "/api/tasks/{task_id}",
            get(task::get_task)
                .put(task::update_task)
                .delete(task::delete_task),
        )
        .route("/api/tasks/{task_id}/assignees", post(task::assign_task))
        .route(
            "/api/tasks/{task_id}/assignees/{user_id}",
            delete(task::unassign_task),
        )
        // chat
        .route("/api/chatrooms", get(chatroom::get_my_chatrooms))
        .route(
            "/api/chatrooms/private/{user_id}",
            post(chatroom::open_private_chatroom),
        )
        .route(
            "/api/chatrooms/{chatroom_id}/messages",
            get(chatroom::get_messages).post(chatroom::send_message),
        )
        // reports & moderation
        .route("/api/reports", post(report::create_report))
        .route("/api/admin/reports", get(report::get_reports))
        .route(
            "/api/admin/reports/{report_id}/resolve",
            post(report::resolve_report),
        )
        .route(
            "/api/admin/suspensions",
            get(suspension::get_suspensions).post(suspension::create_suspension),
        )
        .route(
            "/api/admin/suspensions/user/{user_id}",
            get(suspension::get_active_suspension),
        )
        .route(
            "/api/admin/suspensions/{suspension_id}",
            put(suspension::update_suspension).delete(suspension::delete_suspension),
        )
        // articles
        .route(
            "/api/articles",
            get(article::get_articles).post(article::create_article),
        )
        .route(
            "/api/articles/{article_id}",
            get(article::get_article)
                .put(article::update_article)
                .delete(article::delete_article),
        )
}
