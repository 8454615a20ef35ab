mod movie;
mod user_data;

pub use movie::Movie;
pub use user_data::{FriendData, UserData};
