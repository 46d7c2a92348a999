/// Substitutions applied, in this order, to the title-cased identifier.
/// Each rule rewrites the whole string before the next one runs.
pub const LABEL_RULES: &[(&str, &str)] = &[
    ("Cbpr", "CBPR+"),
    ("Mt", "MT"),
    ("Stp", "STP"),
    ("Fx", "FX"),
    ("Fi ", "FI "),
    ("B2c", "B2C"),
    ("B2b", "B2B"),
    ("Saas", "SaaS"),
    ("Lei", "LEI"),
    ("Uetr", "UETR"),
    ("Cov ", "COV "),
    ("Iso", "ISO"),
    ("Xml", "XML"),
    ("Api", "API"),
    ("Kyc", "KYC"),
    ("Aml", "AML"),
    ("Camt", "camt"),
    ("Pacs", "pacs"),
    ("Pain", "pain"),
    ("Rejt", "REJT"),
    ("Retn", "RETN"),
    ("Rtgs", "RTGS"),
];

/// Convert a scenario identifier such as `mt103_stp_payment` into its
/// display label, `MT103 STP Payment`.
pub fn format_display_name(name: &str) -> String {
    let spaced = name.replace(['_', '-'], " ");
    LABEL_RULES
        .iter()
        .fold(title_case(&spaced), |label, (from, to)| {
            label.replace(from, to)
        })
}

/// Upper-case every cased letter that follows an uncased character and
/// lower-case the rest. Digits and caseless scripts are uncased, so `b2c`
/// becomes `B2C` and `日本mt` becomes `日本Mt`.
fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_is_cased = false;

    for ch in text.chars() {
        let cased = ch.is_lowercase() || ch.is_uppercase();
        if !cased {
            result.push(ch);
        } else if previous_is_cased {
            result.extend(ch.to_lowercase());
        } else {
            result.extend(ch.to_uppercase());
        }
        previous_is_cased = cased;
    }

    result
}
