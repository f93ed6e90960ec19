/// Trim the common prefix of two alleles.
///
/// Returns the number of trimmed characters together with the remaining alleles.
pub(crate) fn trim_common_prefix<'a>(
    reference: &'a str,
    alternative: &'a str,
) -> (usize, &'a str, &'a str) {
    let trim = reference
        .bytes()
        .zip(alternative.bytes())
        .take_while(|(r, a)| r == a)
        .count();

    (trim, &reference[trim..], &alternative[trim..])
}

/// Trim the common suffix of two alleles.
///
/// Returns the number of trimmed characters together with the remaining alleles.
pub(crate) fn trim_common_suffix<'a>(
    reference: &'a str,
    alternative: &'a str,
) -> (usize, &'a str, &'a str) {
    let trim = reference
        .bytes()
        .rev()
        .zip(alternative.bytes().rev())
        .take_while(|(r, a)| r == a)
        .count();

    (
        trim,
        &reference[..reference.len() - trim],
        &alternative[..alternative.len() - trim],
    )
}

/// Trim alleles the way variants are normalized on construction: common suffix first, then
/// the common prefix, shifting `position` by the length of the trimmed prefix.
pub(crate) fn trim_alleles<'a>(
    position: i32,
    reference: &'a str,
    alternative: &'a str,
) -> (i32, &'a str, &'a str) {
    let (_, reference, alternative) = trim_common_suffix(reference, alternative);
    let (prefix, reference, alternative) = trim_common_prefix(reference, alternative);
    (position + prefix as i32, reference, alternative)
}
