pub mod maintdb_server;
