pub mod producto_repo;

pub use producto_repo::ProductoRepo;
