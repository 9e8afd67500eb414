mod inference_module_factory;
mod relay_inference_module;
mod scaffold_inference_module;

pub use inference_module_factory::{InferenceModuleFactory, InferenceProvider};
pub use relay_inference_module::RelayInferenceModule;
pub use scaffold_inference_module::ScaffoldInferenceModule;
