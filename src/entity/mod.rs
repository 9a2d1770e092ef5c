pub mod events;
pub mod order_items;
pub mod orders;
pub mod products;
pub mod status;
pub mod users;

pub use events::Entity as Events;
pub use order_items::Entity as OrderItems;
pub use orders::Entity as Orders;
pub use products::Entity as Products;
pub use status::{ItemStatus, OrderStatus};
pub use users::Entity as Users;
