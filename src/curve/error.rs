use crate::error::AbComputeErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderErr {
    #[error("failed to write curve: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize curve: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<RenderErr> for AbComputeErr {
    fn from(err: RenderErr) -> AbComputeErr {
        AbComputeErr::Render(err)
    }
}
