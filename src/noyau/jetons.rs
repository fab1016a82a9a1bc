// src/noyau/jetons.rs

/// Jeton immuable : produit une fois par évaluation, jamais modifié ensuite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,

    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - littéraux décimaux (ex: 12, 1.5, .5, 5.) — un seul point par littéral
/// - opérateurs + - * /
/// - variantes Unicode × ÷ − (pavé de boutons), normalisées en * / -
/// - parenthèses ( )
///
/// Moins unaire : si '-' n'arrive PAS après un nombre ou ')', on injecte
/// un Num(0) juste avant, donc "-5" donne [0, -, 5]. Seulement pour '-'.
///
/// Entrée vide (ou espaces seuls) => Ok(vec![]) ; c'est l'appelant qui
/// décide quoi en faire (voir eval.rs).
pub fn tokenize(s: &str) -> Result<Vec<Tok>, String> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            out.push(Tok::LPar);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Tok::RPar);
            i += 1;
            continue;
        }

        // Opérateurs (ASCII + variantes Unicode du pavé)
        match c {
            '+' => {
                out.push(Tok::Plus);
                i += 1;
                continue;
            }
            '-' | '−' => {
                // moins unaire : pas de valeur fermée juste avant => 0 implicite
                if !matches!(out.last(), Some(Tok::Num(_)) | Some(Tok::RPar)) {
                    out.push(Tok::Num(0.0));
                }
                out.push(Tok::Minus);
                i += 1;
                continue;
            }
            '*' | '×' => {
                out.push(Tok::Star);
                i += 1;
                continue;
            }
            '/' | '÷' => {
                out.push(Tok::Slash);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Littéral décimal : suite maximale de chiffres avec au plus un '.'
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            let mut points = 0usize;

            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                if chars[i] == '.' {
                    points += 1;
                    if points > 1 {
                        // deux points dans le même littéral : refus immédiat,
                        // pas de troncature silencieuse
                        return Err("littéral invalide: deux points décimaux".into());
                    }
                }
                i += 1;
            }

            let lit: String = chars[start..i].iter().collect();
            if lit == "." {
                return Err("littéral invalide: point seul".into());
            }

            let v: f64 = lit
                .parse()
                .map_err(|_| format!("littéral invalide: '{lit}'"))?;
            out.push(Tok::Num(v));
            continue;
        }

        return Err(format!("caractère inattendu: '{c}'"));
    }

    Ok(out)
}

/// Format utilitaire (panneau détails + tests) : liste de jetons en texte.
pub fn format_jetons(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(v) => super::format::format_valeur(*v),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
