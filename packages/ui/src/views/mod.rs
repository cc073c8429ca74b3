mod no_connections;
pub use no_connections::{
    connect_whatsapp, NoConnectionsView, CONNECTIONS_ROUTE, CONNECT_LABEL, DESCRIPTION, HEADING,
};
