//! Phonetic folding for French given names.
//!
//! The chain is strictly ordered: every rule operates on the output of the
//! previous one, and no rule reintroduces a pattern consumed by a later one.
//! Reordering the steps changes the output ("Sophie" relies on ph → f running
//! before the trailing-"ie" strip).

use super::accent::fold_accents;

/// Phonetic folding - accent folding followed by a fixed chain of French
/// phonetic reductions. Spelling variants of the same spoken name fold to
/// one representative string.
/// Example: "Sophie" → "sofi", "Quentin" → "kentin", "Bernard" → "bernar"
pub fn fold_phonetic(name: &str) -> String {
    let folded = fold_accents(name);
    let folded = replace_y(&folded);
    let folded = collapse_repeats(&folded);
    let folded = strip_final_ard(&folded);
    let folded = replace_ph(&folded);
    let folded = replace_hard_k(&folded);
    let folded = strip_final_ie(&folded);
    let folded = drop_h(&folded);
    tidy_separators(&folded)
}

/// "y" sounds like "i" (Yves/Ives, Maryse/Marise)
fn replace_y(s: &str) -> String {
    s.replace('y', "i")
}

/// Collapse runs of identical consecutive characters to a single occurrence
/// (Emma/Ema, Apolline/Apoline). One pass handles runs of any length.
fn collapse_repeats(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last: Option<char> = None;
    for c in s.chars() {
        if Some(c) != last {
            out.push(c);
        }
        last = Some(c);
    }
    out
}

/// Final "ard" has a silent "d" (Bernard/Bernar)
fn strip_final_ard(s: &str) -> String {
    match s.strip_suffix("ard") {
        Some(stem) => format!("{}ar", stem),
        None => s.to_string(),
    }
}

/// "ph" sounds like "f" (Sophie/Sofie)
fn replace_ph(s: &str) -> String {
    s.replace("ph", "f")
}

/// "ck" and "qu" sound like "k" (Quentin/Kentin)
fn replace_hard_k(s: &str) -> String {
    s.replace("ck", "k").replace("qu", "k")
}

/// Final "ie" has a silent "e" (Marie/Mari)
fn strip_final_ie(s: &str) -> String {
    match s.strip_suffix("ie") {
        Some(stem) => format!("{}i", stem),
        None => s.to_string(),
    }
}

/// "h" is silent in French (Hélio/Élio, Léah/Léa)
fn drop_h(s: &str) -> String {
    s.replace('h', "")
}

/// Collapse whitespace runs to a single space and hyphen runs to a single
/// hyphen, then strip separators left dangling at either end.
fn tidy_separators(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        let c = if c.is_whitespace() { ' ' } else { c };
        if (c == ' ' || c == '-') && out.ends_with(c) {
            continue;
        }
        out.push(c);
    }
    out.trim_matches(|c| c == ' ' || c == '-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_y() {
        assert_eq!(replace_y("yves"), "ives");
        assert_eq!(replace_y("maryse"), "marise");
    }

    #[test]
    fn test_collapse_repeats() {
        assert_eq!(collapse_repeats("emma"), "ema");
        assert_eq!(collapse_repeats("apolline"), "apoline");
        assert_eq!(collapse_repeats("annnne"), "ane");
        assert_eq!(collapse_repeats("abc"), "abc");
    }

    #[test]
    fn test_strip_final_ard() {
        assert_eq!(strip_final_ard("bernard"), "bernar");
        assert_eq!(strip_final_ard("richard"), "richar");
        // Suffix only, not mid-word
        assert_eq!(strip_final_ard("ardent"), "ardent");
    }

    #[test]
    fn test_replace_ph() {
        assert_eq!(replace_ph("sophie"), "sofie");
        assert_eq!(replace_ph("philippe"), "filippe");
    }

    #[test]
    fn test_replace_hard_k() {
        assert_eq!(replace_hard_k("quentin"), "kentin");
        assert_eq!(replace_hard_k("franck"), "frank");
        assert_eq!(replace_hard_k("jacques"), "jackes");
    }

    #[test]
    fn test_strip_final_ie() {
        assert_eq!(strip_final_ie("marie"), "mari");
        assert_eq!(strip_final_ie("pierre"), "pierre");
        // Suffix only
        assert_eq!(strip_final_ie("pierrette"), "pierrette");
    }

    #[test]
    fn test_drop_h() {
        assert_eq!(drop_h("helio"), "elio");
        assert_eq!(drop_h("thomas"), "tomas");
        assert_eq!(drop_h("hhh"), "");
    }

    #[test]
    fn test_tidy_separators() {
        assert_eq!(tidy_separators("jean  pierre"), "jean pierre");
        assert_eq!(tidy_separators("jean--pierre"), "jean-pierre");
        assert_eq!(tidy_separators("-marie-"), "marie");
        assert_eq!(tidy_separators(" - - "), "");
    }

    #[test]
    fn test_fold_phonetic_chain() {
        assert_eq!(fold_phonetic("Sophie"), "sofi");
        assert_eq!(fold_phonetic("Quentin"), "kentin");
        assert_eq!(fold_phonetic("Hélio"), "elio");
        assert_eq!(fold_phonetic("Marie"), "mari");
        assert_eq!(fold_phonetic("Bernard"), "bernar");
    }

    #[test]
    fn test_fold_phonetic_can_fold_away_entirely() {
        assert_eq!(fold_phonetic("h-h"), "");
        assert_eq!(fold_phonetic(""), "");
    }
}
