mod home;
pub use home::Home;

mod connections;
pub use connections::Connections;
