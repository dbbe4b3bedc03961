use std::path::PathBuf;
use std::sync::Arc;

use solcheck::ContractValidator;

use crate::generator::ContractGenerator;

pub type SharedState = Arc<AppState>;

/// Everything a handler needs. Immutable after startup; the dataset file is
/// re-read on every request.
#[derive(Clone)]
pub struct AppState {
    pub generator: ContractGenerator,
    pub validator: ContractValidator,
    pub dataset_path: PathBuf,
}

impl AppState {
    pub fn new(generator: ContractGenerator, validator: ContractValidator, dataset_path: PathBuf) -> Self {
        Self {
            generator,
            validator,
            dataset_path,
        }
    }
}
