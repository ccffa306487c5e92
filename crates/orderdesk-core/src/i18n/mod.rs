//! Static translated strings for every supported locale.
//!
//! Keys are dotted paths (`speech.orderNumber`). Lookup falls back to English,
//! then to the key itself. Placeholders are written `{name}` and filled from
//! the argument list; unknown placeholders are left as-is. Count-dependent
//! messages use `_one` / `_other` suffixed keys.

mod en;
mod fr;
mod pt;

use crate::domain::Locale;

fn table(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::En => en::MESSAGES,
        Locale::Fr => fr::MESSAGES,
        Locale::Pt => pt::MESSAGES,
    }
}

fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
    table(locale)
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, message)| *message)
}

/// Raw template for `key`, with English and key fallback.
pub fn template(locale: Locale, key: &str) -> String {
    lookup(locale, key)
        .or_else(|| lookup(Locale::En, key))
        .map_or_else(|| key.to_string(), str::to_string)
}

/// Whether `key` exists for `locale` (no fallback).
pub fn has_key(locale: Locale, key: &str) -> bool {
    lookup(locale, key).is_some()
}

/// Fill `{placeholder}` slots in `template` from `args`.
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                match args.iter().find(|(k, _)| *k == name) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Translate `key` into `locale`.
pub fn t(locale: Locale, key: &str, args: &[(&str, &str)]) -> String {
    interpolate(&template(locale, key), args)
}

/// Translate a count-dependent message, passing `count` as `{count}`.
pub fn t_count(locale: Locale, key: &str, count: usize, args: &[(&str, &str)]) -> String {
    let suffix = if is_singular(locale, count) {
        "one"
    } else {
        "other"
    };
    let count_text = count.to_string();
    let mut all_args = Vec::with_capacity(args.len() + 1);
    all_args.push(("count", count_text.as_str()));
    all_args.extend_from_slice(args);
    t(locale, &format!("{key}_{suffix}"), &all_args)
}

/// French treats zero as singular; English and Portuguese only one.
const fn is_singular(locale: Locale, count: usize) -> bool {
    match locale {
        Locale::Fr => count <= 1,
        Locale::En | Locale::Pt => count == 1,
    }
}

/// Format a money amount with two decimals.
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_locale_defines_every_english_key() {
        for (key, _) in en::MESSAGES {
            for locale in Locale::ALL {
                assert!(has_key(locale, key), "{locale} is missing {key}");
            }
        }
        assert_eq!(fr::MESSAGES.len(), en::MESSAGES.len());
        assert_eq!(pt::MESSAGES.len(), en::MESSAGES.len());
    }

    #[test]
    fn translates_with_arguments() {
        assert_eq!(
            t(Locale::Fr, "dashboard.welcomeBack", &[("name", "John Doe")]),
            "Bon retour, John Doe"
        );
        assert_eq!(
            t(Locale::En, "orders.order", &[("id", "2")]),
            "Order #2"
        );
    }

    #[test]
    fn missing_key_falls_back_to_key() {
        assert_eq!(t(Locale::Pt, "does.not.exist", &[]), "does.not.exist");
    }

    #[test]
    fn unknown_placeholders_survive() {
        assert_eq!(interpolate("a {x} b {y}", &[("x", "1")]), "a 1 b {y}");
        assert_eq!(interpolate("open { brace", &[]), "open { brace");
        assert_eq!(interpolate("", &[("x", "1")]), "");
    }

    #[test]
    fn plural_rules_per_locale() {
        assert_eq!(
            t_count(Locale::En, "speech.orderCount", 1, &[]),
            "You have 1 order."
        );
        assert_eq!(
            t_count(Locale::En, "speech.orderCount", 0, &[]),
            "You have 0 orders."
        );
        assert_eq!(
            t_count(Locale::Fr, "speech.orderCount", 0, &[]),
            "Vous avez 0 commande."
        );
        assert_eq!(
            t_count(Locale::Pt, "speech.orderCount", 3, &[]),
            "Você tem 3 pedidos."
        );
    }

    #[test]
    fn amounts_have_two_decimals() {
        assert_eq!(format_amount(249.97), "249.97");
        assert_eq!(format_amount(5.0), "5.00");
    }
}
