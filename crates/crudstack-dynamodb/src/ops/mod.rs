//! CRUD operation handlers.
//!
//! Each operation is one thin function: compile the expressions it needs,
//! issue exactly one store call, and shape the outcome into an
//! [`ExecutionResult`]. Request-class failures are reported before the
//! store is touched.
//!
//! [`ExecutionResult`]: crudstack_model::ExecutionResult

mod create;
mod delete;
mod read;
mod update;

pub(crate) use create::create;
pub(crate) use delete::delete;
pub(crate) use read::read;
pub(crate) use update::update;
