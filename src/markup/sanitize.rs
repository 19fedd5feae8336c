/// Escapes a string for HTML.
///
/// Every markup-significant character becomes its entity form, so user
/// content can never be interpreted as active markup. Total; the rest of
/// the pipeline assumes its input has been through here.
pub fn sanitize(input: &str) -> String {
    // Some insane person did an extremely detailed benchmark of this.
    // https://lise-henry.github.io/articles/optimising_strings.html
    let len = input.len();
    let mut output: Vec<u8> = Vec::with_capacity(len * 4);

    for c in input.bytes() {
        // https://cheatsheetseries.owasp.org/cheatsheets/Cross_Site_Scripting_Prevention_Cheat_Sheet.html
        match c {
            b'<' => output.extend_from_slice(b"&lt;"),
            b'>' => output.extend_from_slice(b"&gt;"),
            b'&' => output.extend_from_slice(b"&amp;"),
            b'\"' => output.extend_from_slice(b"&quot;"),
            b'\'' => output.extend_from_slice(b"&#x27;"),
            _ => output.push(c),
        }
    }

    unsafe { String::from_utf8_unchecked(output) }
}
