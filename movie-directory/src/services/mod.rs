pub mod omdb_service;
