pub mod price;
pub mod tick;
