#![allow(dead_code)]

use blowfish::Blowfish;
use blowfish::cipher::generic_array::GenericArray;
use blowfish::cipher::{BlockEncrypt, KeyInit};

pub const NAME_FIELD_LEN: usize = 260;

/// 按块加密，不做填充
pub fn encrypt_raw(key: &[u8], data: &[u8]) -> Vec<u8> {
    let cipher: Blowfish = Blowfish::new_from_slice(key).expect("valid blowfish key");
    let mut out = data.to_vec();
    for block in out.chunks_exact_mut(8) {
        cipher.encrypt_block(GenericArray::from_mut_slice(block));
    }
    out
}

/// PKCS#5 填充后加密
pub fn encrypt_padded(key: &[u8], plaintext: &[u8]) -> Vec<u8> {
    let pad = 8 - plaintext.len() % 8;
    let mut data = plaintext.to_vec();
    data.extend(std::iter::repeat_n(pad as u8, pad));
    encrypt_raw(key, &data)
}

/// 组装容器：10 字节头 + (size, name[260], content) 条目链
pub fn build_container(entries: &[(&[u8], &[u8])]) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(&(entries.len() as u32).to_le_bytes());
    buf.extend_from_slice(&[0u8; 4]);
    buf.extend_from_slice(&0x0108u16.to_le_bytes());

    for (name, content) in entries {
        buf.extend_from_slice(&(content.len() as u32).to_le_bytes());
        buf.extend_from_slice(&name_field(name));
        buf.extend_from_slice(content);
    }

    seal_archive_size(&mut buf);
    buf
}

pub fn name_field(name: &[u8]) -> [u8; NAME_FIELD_LEN] {
    let mut field = [0u8; NAME_FIELD_LEN];
    field[..name.len()].copy_from_slice(name);
    field
}

/// 把偏移 4 处的归档大小改写为当前长度
pub fn seal_archive_size(buf: &mut [u8]) {
    let len = buf.len() as u32;
    buf[4..8].copy_from_slice(&len.to_le_bytes());
}
