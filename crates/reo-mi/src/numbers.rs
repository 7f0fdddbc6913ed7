// Spelling out numbers in Māori.

/// Numbers from here up are left as digits.
pub const LIMIT: u64 = 1_000_000;

const ONES: [&str; 10] = [
    "kore", "tahi", "rua", "toru", "whā", "rima", "ono", "whitu", "waru", "iwa",
];

/// Place word by decimal position, units first.
const PLACES: [&str; 6] = ["", "tekau", "rau", "mano", "tekau", "rau"];

const FIXUPS: [(&str, &str); 3] = [
    ("tahi tekau", "tekau"),
    ("mano kotahi", "mano"),
    ("mā kotahi", "mā tahi"),
];

/// Spell out `n` in words: 12345 is "tekau mā rua mano toru rau whā tekau
/// mā rima".
///
/// Numbers of a million or more are returned as digits with a warning.
pub fn digits_to_text(n: u64) -> String {
    if n >= LIMIT {
        log::warn!("only numbers below 1,000,000 can be spelled out; leaving {n} as digits");
        return n.to_string();
    }

    let mut words: Vec<String> = Vec::new();
    for (place, d) in n.to_string().bytes().rev().enumerate() {
        let digit = usize::from(d - b'0');
        let place_word = PLACES[place];
        if digit == 0 && n != 0 {
            // thousands are still named when their digit is zero
            if place == 3 {
                words.push("mano".to_string());
            }
            continue;
        }
        let ones = if digit == 1 && matches!(place_word, "rau" | "mano") {
            "kotahi".to_string()
        } else if place == 0 || place == 3 {
            format!("mā {}", ONES[digit])
        } else {
            ONES[digit].to_string()
        };
        words.push(format!("{ones} {place_word}").trim().to_string());
    }
    words.reverse();

    let mut text = words.join(" ");
    for (from, to) in FIXUPS {
        text = text.replace(from, to);
    }
    if let Some(rest) = text.strip_prefix("mā") {
        text = rest.to_string();
    }
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// End of the number starting at `start`: a digit run, optionally followed
/// by one `,` and up to three more digits.
fn number_end(chars: &[char], start: usize) -> usize {
    let mut end = start;
    while end < chars.len() && chars[end].is_ascii_digit() {
        end += 1;
    }
    if chars.get(end) == Some(&',') && chars.get(end + 1).is_some_and(char::is_ascii_digit) {
        end += 1;
        let group_end = (end + 3).min(chars.len());
        while end < group_end && chars[end].is_ascii_digit() {
            end += 1;
        }
    }
    end
}

/// Rewrite currency, range and percent notation into words around the
/// numbers: `$5` → `5 tāra`, `£5` → `5 pāuna`, `5-10` → `5 ki te 10`,
/// `5%` → `5 paihēneti`.
pub fn prepare_numbers(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + 16);
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let after_digit = i > 0 && chars[i - 1].is_ascii_digit();
        let before_digit = chars.get(i + 1).is_some_and(char::is_ascii_digit);
        match c {
            '$' | '£' if before_digit => {
                let end = number_end(&chars, i + 1);
                out.extend(&chars[i + 1..end]);
                out.push_str(if c == '$' { " tāra" } else { " pāuna" });
                i = end;
                continue;
            }
            '-' if after_digit && before_digit => out.push_str(" ki te "),
            '%' if after_digit => out.push_str(" paihēneti"),
            _ => out.push(c),
        }
        i += 1;
    }
    out
}

/// Replace every number in `text` with its spelling, after
/// [`prepare_numbers`].
pub fn convert_numbers(text: &str) -> String {
    let prepared = prepare_numbers(text);
    let chars: Vec<char> = prepared.chars().collect();
    let mut out = String::with_capacity(prepared.len() * 2);
    let mut i = 0;
    while i < chars.len() {
        if !chars[i].is_ascii_digit() {
            out.push(chars[i]);
            i += 1;
            continue;
        }
        let end = number_end(&chars, i);
        let digits: String = chars[i..end].iter().filter(|c| c.is_ascii_digit()).collect();
        match digits.parse::<u64>() {
            Ok(n) => out.push_str(&digits_to_text(n)),
            Err(_) => {
                log::warn!("number {digits} is too large to spell out");
                out.extend(&chars[i..end]);
            }
        }
        i = end;
    }
    out
}
