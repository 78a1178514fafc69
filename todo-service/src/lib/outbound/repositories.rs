pub mod memory;
pub mod todo;
pub mod user;

pub use memory::InMemoryTodoRepository;
pub use memory::InMemoryUserRepository;
pub use todo::PostgresTodoRepository;
pub use user::PostgresUserRepository;
