mod controller;
mod input;
mod render;
mod state;

pub use controller::SessionController;
pub use input::{read_smiles_file, InputError, ACCEPTED_EXTENSIONS};
pub use render::{render_record, render_view, ResultView, NOT_AVAILABLE};
pub use state::{Phase, SessionState};
