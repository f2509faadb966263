pub use super::bid::Entity as Bid;
pub use super::conference::Entity as Conference;
pub use super::matches::Entity as Matches;
pub use super::notification::Entity as Notification;
pub use super::player::Entity as Player;
pub use super::season::Entity as Season;
pub use super::team::Entity as Team;
pub use super::user::Entity as User;
