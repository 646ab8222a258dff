pub mod form;
pub mod history;
pub mod session;
pub mod shell;

pub use form::{Submission, TipForm};
pub use history::HistoryView;
pub use session::{Flow, Session, ShellCommand};
