//! Blowfish 分组解密
//!
//! 负载按 8 字节分组逐块解密，分组之间没有链接（ECB），
//! 也没有 IV。分组内的两个 32 位字按大端解释。

use blowfish::Blowfish;
use blowfish::cipher::generic_array::GenericArray;
use blowfish::cipher::{BlockDecrypt, KeyInit};

use crate::error::{CubeError, CubeResult};

/// Blowfish 分组长度（字节）
pub const BLOCK_SIZE: usize = 8;

/// 由原始密钥建立的 Blowfish 密钥编排
pub struct KeySchedule {
    cipher: Blowfish,
}

impl KeySchedule {
    /// 建立密钥编排，密钥长度需在 4..=56 字节之间
    pub fn new(key: &[u8]) -> CubeResult<Self> {
        let cipher = Blowfish::new_from_slice(key).map_err(|_| CubeError::InvalidKey)?;
        Ok(Self { cipher })
    }

    /// 原地解密单个 8 字节分组
    pub fn decrypt_block(&self, block: &mut [u8; BLOCK_SIZE]) {
        self.cipher
            .decrypt_block(GenericArray::from_mut_slice(&mut block[..]));
    }

    /// 原地逐块解密，末尾不足 8 字节的部分保持不变
    pub fn decrypt_blocks(&self, data: &mut [u8]) {
        for block in data.chunks_exact_mut(BLOCK_SIZE) {
            self.cipher.decrypt_block(GenericArray::from_mut_slice(block));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_key() {
        assert!(matches!(KeySchedule::new(b"abc"), Err(CubeError::InvalidKey)));
    }

    #[test]
    fn blocks_are_decrypted_independently() {
        let schedule = KeySchedule::new(b"221BBakerMycroft").unwrap();

        let mut data = [0x11u8; 16];
        data[8..].fill(0x22);
        let mut first: [u8; BLOCK_SIZE] = data[..8].try_into().unwrap();
        let mut second: [u8; BLOCK_SIZE] = data[8..].try_into().unwrap();

        schedule.decrypt_blocks(&mut data);
        schedule.decrypt_block(&mut first);
        schedule.decrypt_block(&mut second);

        assert_eq!(data[..8], first);
        assert_eq!(data[8..], second);
    }
}
