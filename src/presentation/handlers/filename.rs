/// Compatibility shim for multipart filenames.
///
/// Browsers send filenames as UTF-8 bytes, but the upload transport decodes
/// them as Latin-1, so a Thai filename arrives as one mojibake char per
/// byte. When every char fits in Latin-1 and the recovered bytes form valid
/// UTF-8, the re-decoded name is used; otherwise the original is kept.
/// Plain ASCII names pass through unchanged either way.
pub fn decode_multipart_filename(raw: &str) -> String {
    if !raw.chars().all(|c| (c as u32) <= 0xFF) {
        return raw.to_string();
    }

    let bytes: Vec<u8> = raw.chars().map(|c| c as u8).collect();
    match String::from_utf8(bytes) {
        Ok(decoded) => decoded,
        Err(_) => raw.to_string(),
    }
}
