use log::warn;
use stylist::css;
use stylist::yew::Global;
use thiserror::Error;
use yew::prelude::*;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StyleError {
    #[error("class token `{0}` contains unsupported characters")]
    InvalidToken(String),
}

fn is_class_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '/' | '.' | '[' | ']' | '%' | '#' | '(' | ')')
}

pub fn parse_token(token: &str) -> Result<&str, StyleError> {
    if !token.is_empty() && token.chars().all(is_class_char) {
        Ok(token)
    } else {
        Err(StyleError::InvalidToken(token.to_string()))
    }
}

/// Appends the valid tokens of `extension` to `base`. Rejected tokens are
/// logged and skipped; the base classes always survive.
pub fn extend(base: impl Into<Classes>, extension: &str) -> Classes {
    let mut classes = base.into();
    for token in extension.split_whitespace() {
        match parse_token(token) {
            Ok(token) => classes.push(token.to_string()),
            Err(err) => warn!("ignoring style extension: {err}"),
        }
    }
    classes
}

/// Page-wide theme: colors, the grid texture and the keyframes used by the
/// classic revision's one-shot entrances.
#[function_component(GlobalStyles)]
pub fn global_styles() -> Html {
    html! {
        <Global css={css!(r#"
            :root {
                --background: 240 10% 4%;
                --foreground: 0 0% 98%;
                --muted-foreground: 240 5% 65%;
                --primary: 263 70% 58%;
                --primary-foreground: 0 0% 100%;
            }

            html, body {
                margin: 0;
                padding: 0;
                min-height: 100%;
                background: hsl(var(--background));
                color: hsl(var(--foreground));
                font-family: "Inter", -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
                -webkit-font-smoothing: antialiased;
            }

            .gradient-bg {
                background:
                    radial-gradient(ellipse at top left, hsl(var(--primary) / 0.12), transparent 55%),
                    linear-gradient(180deg, hsl(240 10% 6%), hsl(var(--background)));
            }

            .grid-pattern {
                background-image:
                    linear-gradient(hsl(var(--foreground) / 0.04) 1px, transparent 1px),
                    linear-gradient(90deg, hsl(var(--foreground) / 0.04) 1px, transparent 1px);
                background-size: 64px 64px;
            }

            .badge-glow {
                box-shadow: 0 0 24px hsl(var(--primary) / 0.35), 0 0 2px hsl(var(--primary) / 0.6);
            }

            @keyframes enter-from-top {
                from { opacity: 0; transform: translateY(-1rem); }
                to { opacity: 1; transform: translateY(0); }
            }

            @keyframes enter-from-bottom {
                from { opacity: 0; transform: translateY(2rem); }
                to { opacity: 1; transform: translateY(0); }
            }

            .enter-top {
                animation: enter-from-top 700ms ease-out both;
            }

            .enter-bottom {
                animation: enter-from-bottom 700ms ease-out both;
            }

            .enter-delay-150 {
                animation-delay: 150ms;
            }

            .enter-delay-300 {
                animation-delay: 300ms;
            }
        "#)} />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_utility_style_tokens() {
        for token in ["mb-12", "md:px-16", "w-1/2", "bg-primary/10", "top-[30%]", "hover:scale-105"] {
            assert_eq!(parse_token(token), Ok(token));
        }
    }

    #[test]
    fn rejects_markup_and_quotes() {
        for token in ["\"oops", "a<b", "x;y", "{}", ""] {
            assert!(parse_token(token).is_err(), "{token}");
        }
    }

    #[test]
    fn extension_keeps_base_and_drops_bad_tokens() {
        let classes = extend("badge", "  mb-12 \"><script> shadow  ");
        assert!(classes.contains("badge"));
        assert!(classes.contains("mb-12"));
        assert!(classes.contains("shadow"));
        assert_eq!(classes.to_string().split_whitespace().count(), 3);
    }

    #[test]
    fn empty_extension_is_base_only() {
        let classes = extend(classes!("a", "b"), "");
        assert_eq!(classes.to_string(), "a b");
    }
}
