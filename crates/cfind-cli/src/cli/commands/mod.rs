mod completions;
mod info;
mod interactive;
mod lookup;
mod open;

pub use completions::run_completions;
pub use info::run_info;
pub use interactive::run_interactive;
pub use lookup::run_lookup;
pub use open::run_open;
