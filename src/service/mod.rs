mod crud;
mod decode;

pub use crud::CrudService;
