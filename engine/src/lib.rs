mod decrypt;

pub mod crypto;
pub mod error;
pub mod format;
pub mod fs;
pub mod keys;

pub use crypto::padding::{PaddingMode, PaddingStatus};
pub use decrypt::{DecodeOptions, DecodeReport, Decoded, decrypt_payload};
pub use error::{CubeError, CubeResult};
pub use format::archive::{PayloadSlice, locate};
pub use fs::io::default_output_path;
pub use keys::CubeFormat;

use std::path::Path;

pub fn decode(input: &Path, output: &Path) -> CubeResult<DecodeReport> {
    decrypt::decrypt_file(input, output, &DecodeOptions::default())
}

pub fn decode_with_options(
    input: &Path,
    output: &Path,
    options: &DecodeOptions,
) -> CubeResult<DecodeReport> {
    decrypt::decrypt_file(input, output, options)
}
