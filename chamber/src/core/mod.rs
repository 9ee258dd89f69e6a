mod error;
mod octant;
mod payload;
mod texture_id;

pub use error::ChamberError;
pub use octant::Octant;
pub use payload::PayloadTrait;
pub use texture_id::TextureId;
