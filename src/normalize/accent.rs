/// Accent folding - lowercase, trim, and replace accented letters with their
/// base letter. Covers the accents found in the INSEE given-names data.
/// Example: "Léa" → "lea", "  Zoé " → "zoe"
pub fn fold_accents(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'à' | 'â' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'ï' | 'î' => 'i',
            'ô' | 'ö' => 'o',
            'ù' | 'û' | 'ü' => 'u',
            'ÿ' | 'ý' => 'y',
            'ç' => 'c',
            'ñ' => 'n',
            _ => c,
        })
        .collect()
}
