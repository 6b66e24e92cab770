use qrcode::{Color, EcLevel, QrCode, Version, types::QrError};

use crate::{
    foundation::error::{WalletQrError, WalletQrResult},
    style::config::{ErrorCorrection, MAX_QR_VERSION},
};

/// Square module matrix, without quiet zone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QrMatrix {
    width: usize,
    version: u32,
    dark: Vec<bool>,
}

impl QrMatrix {
    /// Modules per side.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Version actually used after growth.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// True if module `(x, y)` is dark. Out-of-range coordinates are light.
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.width && self.dark[y * self.width + x]
    }
}

fn ec_level(ec: ErrorCorrection) -> EcLevel {
    match ec {
        ErrorCorrection::L => EcLevel::L,
        ErrorCorrection::M => EcLevel::M,
        ErrorCorrection::Q => EcLevel::Q,
        ErrorCorrection::H => EcLevel::H,
    }
}

/// Encode `data` starting at `min_version`, growing the version until the data fits.
///
/// Fails with [`WalletQrError::InvalidConfig`] when `min_version` is out of range or no version
/// up to 40 holds the data at this error-correction level.
pub fn encode_qr(data: &str, min_version: u32, ec: ErrorCorrection) -> WalletQrResult<QrMatrix> {
    if min_version == 0 || min_version > MAX_QR_VERSION {
        return Err(WalletQrError::invalid_config(format!(
            "version must be within 1..={MAX_QR_VERSION}, got {min_version}"
        )));
    }

    let level = ec_level(ec);
    for version in min_version..=MAX_QR_VERSION {
        // Bounded by MAX_QR_VERSION, so the cast cannot truncate.
        match QrCode::with_version(data.as_bytes(), Version::Normal(version as i16), level) {
            Ok(code) => {
                if version != min_version {
                    tracing::debug!(min_version, version, "qr version grown to fit data");
                }
                let dark = code
                    .to_colors()
                    .into_iter()
                    .map(|c| c == Color::Dark)
                    .collect();
                return Ok(QrMatrix {
                    width: code.width(),
                    version,
                    dark,
                });
            }
            Err(QrError::DataTooLong) => continue,
            Err(e) => {
                return Err(WalletQrError::invalid_config(format!(
                    "qr encoding failed: {e}"
                )));
            }
        }
    }

    Err(WalletQrError::invalid_config(format!(
        "data too long for any QR version up to {MAX_QR_VERSION} at error correction {} ({} bytes)",
        ec.as_str(),
        data.len()
    )))
}

#[cfg(test)]
#[path = "../../tests/unit/qr/encode.rs"]
mod tests;
