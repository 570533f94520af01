pub use super::chat_message::Entity as ChatMessage;
pub use super::item::Entity as Item;
pub use super::market::Entity as Market;
pub use super::party::Entity as Party;
pub use super::party_member::Entity as PartyMember;
pub use super::user::Entity as User;
