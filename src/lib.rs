#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod catalogue;
pub mod collection;
pub mod errors;
pub mod keywords;
pub mod oracle;
pub mod pass;
pub mod scan;
pub mod settings;
pub mod shader;
pub mod utils;
pub mod variant_spec;

pub use catalogue::ObservedKeywordCatalogue;
pub use collection::{VariantCollection, VariantCollectionBuilder, VariantRecord};
pub use errors::{BakeError, Result};
pub use keywords::KeywordSet;
pub use oracle::{Capability, CapabilityOracle, SpecialShaders, VariantValidator};
pub use pass::PassType;
pub use scan::{ContentNode, MaterialBinding, ScanState, Surface, SurfaceId};
pub use settings::{BakeSettings, bake};
pub use shader::{ShaderId, ShaderResolver};
pub use utils::interner;
pub use variant_spec::{Choice, OptionGroup, WantedVariant, WantedVariantDesc};
