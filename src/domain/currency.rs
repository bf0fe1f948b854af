/// Display symbol for an ISO 4217 code; unknown codes pass through unchanged.
pub fn currency_symbol(code: &str) -> &str {
    match code {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" | "CNY" => "¥",
        "KRW" => "₩",
        "INR" => "₹",
        "RUB" => "₽",
        "TRY" => "₺",
        "BRL" => "R$",
        "CAD" => "C$",
        "AUD" => "A$",
        "NZD" => "NZ$",
        "HKD" => "HK$",
        "SGD" => "S$",
        "SEK" | "NOK" | "DKK" => "kr",
        "PLN" => "zł",
        "THB" => "฿",
        "MXN" => "Mex$",
        "ZAR" => "R",
        other => other,
    }
}
