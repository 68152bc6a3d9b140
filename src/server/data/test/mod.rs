mod article;
mod chatroom;
mod friend;
mod notification;
mod organization;
mod preference;
mod report;
mod suspension;
mod task;
mod user;
