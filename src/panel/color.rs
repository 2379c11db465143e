//! Button colours as written in panel configuration files.
//!
//! Accepts the same spellings as an HTML colour translator:
//!
//! - `#RRGGBB` (opaque) and `#RGB` (each digit doubled);
//! - named web colours and system colours (`ButtonFace`, `Window`, the CSS2
//!   system keywords such as `threedface`), ASCII case-insensitive;
//! - a single integer taken as a raw `0xAARRGGBB` value: decimal, `#` hex of
//!   up to eight digits, or `0x`/`&h` hex (six-digit `0x`/`&h` forms are opaque);
//! - `r,g,b` or `a,r,g,b` components, each 0-255 in any integer form above;
//! - the empty string, which is [`Color::EMPTY`].

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A colour value that failed to parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid color '{0}'")]
pub struct InvalidColor(pub String);

/// 32-bit ARGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Alpha channel (255 = opaque).
    pub a: u8,
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// The "no colour" value produced by an empty field: all channels zero.
    pub const EMPTY: Color = Color::argb(0, 0, 0, 0);

    /// Creates an opaque colour.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { a: 255, r, g, b }
    }

    /// Creates a colour with an explicit alpha channel.
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Unpacks a `0xAARRGGBB` value.
    pub const fn from_argb_u32(value: u32) -> Self {
        Self {
            a: (value >> 24) as u8,
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }

    /// Returns `true` when the alpha channel is zero.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Looks up a named web or system colour, ignoring ASCII case.
    pub fn named(name: &str) -> Option<Self> {
        let name = if name.eq_ignore_ascii_case("lightgrey") {
            "lightgray"
        } else {
            name
        };
        NAMED_COLORS
            .iter()
            .chain(SYSTEM_COLORS)
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
            .map(|&(_, argb)| Self::from_argb_u32(argb))
    }
}

impl FromStr for Color {
    type Err = InvalidColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_html(s).ok_or_else(|| InvalidColor(s.to_string()))
    }
}

/// Formats as `#RRGGBB` for opaque colours and `#AARRGGBB` otherwise, which
/// parses back to the same value.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "#{:02X}{:02X}{:02X}{:02X}",
                self.a, self.r, self.g, self.b
            )
        }
    }
}

fn from_html(s: &str) -> Option<Color> {
    if s.is_empty() {
        return Some(Color::EMPTY);
    }
    // The fixed-width HTML forms are checked on the untrimmed text.
    if let Some(digits) = s.strip_prefix('#') {
        match digits.len() {
            6 => return hex_u32(digits).map(|v| Color::from_argb_u32(0xFF00_0000 | v)),
            3 => {
                let v = hex_u32(digits)?;
                // Each nibble is doubled: #F80 -> #FF8800
                let expand = |nibble: u32| ((nibble & 0xF) * 0x11) as u8;
                return Some(Color::rgb(expand(v >> 8), expand(v >> 4), expand(v)));
            }
            _ => {}
        }
    }
    if let Some(color) = html_system_color(s) {
        return Some(color);
    }
    from_text(s)
}

fn from_text(s: &str) -> Option<Color> {
    let text = s.trim();
    if text.is_empty() {
        return Some(Color::EMPTY);
    }
    if let Some(color) = Color::named(text) {
        return Some(color);
    }
    if !text.contains(',') {
        if let Some(name) = quoted(text) {
            // A quoted unknown name still yields a colour, with every channel zero.
            return Some(Color::named(name).unwrap_or(Color::EMPTY));
        }
        let opaque_prefix = (text.len() == 7 && text.starts_with('#'))
            || (text.len() == 8 && (text.starts_with("0x") || text.starts_with("&h")));
        if opaque_prefix {
            return int_from_text(text).map(|v| Color::from_argb_u32(0xFF00_0000 | v as u32));
        }
    }

    let values = text
        .split(',')
        .map(int_from_text)
        .collect::<Option<Vec<i32>>>()?;
    let channel = |v: i32| u8::try_from(v).ok();
    match values.as_slice() {
        [argb] => Some(Color::from_argb_u32(*argb as u32)),
        [r, g, b] => Some(Color::rgb(channel(*r)?, channel(*g)?, channel(*b)?)),
        [a, r, g, b] => Some(Color::argb(
            channel(*a)?,
            channel(*r)?,
            channel(*g)?,
            channel(*b)?,
        )),
        _ => None,
    }
}

fn quoted(text: &str) -> Option<&str> {
    let first = text.chars().next()?;
    if text.len() >= 2 && (first == '\'' || first == '"') && text.ends_with(first) {
        Some(&text[1..text.len() - 1])
    } else {
        None
    }
}

/// One integer: `#` or `0x`/`&h` hexadecimal (up to 32 bits, two's
/// complement), otherwise signed decimal.
fn int_from_text(field: &str) -> Option<i32> {
    let text = field.trim();
    if let Some(digits) = text.strip_prefix('#') {
        return hex_u32(digits).map(|v| v as i32);
    }
    let has_hex_prefix = text
        .get(..2)
        .is_some_and(|p| p.eq_ignore_ascii_case("0x") || p.eq_ignore_ascii_case("&h"));
    if has_hex_prefix {
        return hex_u32(&text[2..]).map(|v| v as i32);
    }
    text.parse::<i32>().ok()
}

fn hex_u32(digits: &str) -> Option<u32> {
    if digits.is_empty() || digits.len() > 8 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

fn html_system_color(name: &str) -> Option<Color> {
    HTML_SYSTEM_COLORS
        .iter()
        .find(|(keyword, _)| keyword.eq_ignore_ascii_case(name))
        .and_then(|(_, system)| Color::named(system))
}

/// CSS2 system colour keywords and the system colour each one stands for.
const HTML_SYSTEM_COLORS: &[(&str, &str)] = &[
    ("activeborder", "ActiveBorder"),
    ("activecaption", "ActiveCaption"),
    ("appworkspace", "AppWorkspace"),
    ("background", "Desktop"),
    ("buttonface", "Control"),
    ("buttonhighlight", "ControlLightLight"),
    ("buttonshadow", "ControlDark"),
    ("buttontext", "ControlText"),
    ("captiontext", "ActiveCaptionText"),
    ("graytext", "GrayText"),
    ("highlight", "Highlight"),
    ("highlighttext", "HighlightText"),
    ("inactiveborder", "InactiveBorder"),
    ("inactivecaption", "InactiveCaption"),
    ("inactivecaptiontext", "InactiveCaptionText"),
    ("infobackground", "Info"),
    ("infotext", "InfoText"),
    ("menu", "Menu"),
    ("menutext", "MenuText"),
    ("scrollbar", "ScrollBar"),
    ("threeddarkshadow", "ControlDarkDark"),
    ("threedface", "Control"),
    ("threedhighlight", "ControlLight"),
    ("threedlightshadow", "ControlLightLight"),
    ("window", "Window"),
    ("windowframe", "WindowFrame"),
    ("windowtext", "WindowText"),
];

/// Desktop system colours with their stock Windows values, as `0xAARRGGBB`.
const SYSTEM_COLORS: &[(&str, u32)] = &[
    ("ActiveBorder", 0xFFB4_B4B4),
    ("ActiveCaption", 0xFF99_B4D1),
    ("ActiveCaptionText", 0xFF00_0000),
    ("AppWorkspace", 0xFFAB_ABAB),
    ("ButtonFace", 0xFFF0_F0F0),
    ("ButtonHighlight", 0xFFFF_FFFF),
    ("ButtonShadow", 0xFFA0_A0A0),
    ("Control", 0xFFF0_F0F0),
    ("ControlDark", 0xFFA0_A0A0),
    ("ControlDarkDark", 0xFF69_6969),
    ("ControlLight", 0xFFE3_E3E3),
    ("ControlLightLight", 0xFFFF_FFFF),
    ("ControlText", 0xFF00_0000),
    ("Desktop", 0xFF00_0000),
    ("GradientActiveCaption", 0xFFB9_D1EA),
    ("GradientInactiveCaption", 0xFFD7_E4F2),
    ("GrayText", 0xFF6D_6D6D),
    ("Highlight", 0xFF00_78D7),
    ("HighlightText", 0xFFFF_FFFF),
    ("HotTrack", 0xFF00_66CC),
    ("InactiveBorder", 0xFFF4_F7FC),
    ("InactiveCaption", 0xFFBF_CDDB),
    ("InactiveCaptionText", 0xFF00_0000),
    ("Info", 0xFFFF_FFE1),
    ("InfoText", 0xFF00_0000),
    ("Menu", 0xFFF0_F0F0),
    ("MenuBar", 0xFFF0_F0F0),
    ("MenuHighlight", 0xFF33_99FF),
    ("MenuText", 0xFF00_0000),
    ("ScrollBar", 0xFFC8_C8C8),
    ("Window", 0xFFFF_FFFF),
    ("WindowFrame", 0xFF64_6464),
    ("WindowText", 0xFF00_0000),
];

/// Named web colours as `0xAARRGGBB`.
const NAMED_COLORS: &[(&str, u32)] = &[
    ("transparent", 0x00FF_FFFF),
    ("aliceblue", 0xFFF0_F8FF),
    ("antiquewhite", 0xFFFA_EBD7),
    ("aqua", 0xFF00_FFFF),
    ("aquamarine", 0xFF7F_FFD4),
    ("azure", 0xFFF0_FFFF),
    ("beige", 0xFFF5_F5DC),
    ("bisque", 0xFFFF_E4C4),
    ("black", 0xFF00_0000),
    ("blanchedalmond", 0xFFFF_EBCD),
    ("blue", 0xFF00_00FF),
    ("blueviolet", 0xFF8A_2BE2),
    ("brown", 0xFFA5_2A2A),
    ("burlywood", 0xFFDE_B887),
    ("cadetblue", 0xFF5F_9EA0),
    ("chartreuse", 0xFF7F_FF00),
    ("chocolate", 0xFFD2_691E),
    ("coral", 0xFFFF_7F50),
    ("cornflowerblue", 0xFF64_95ED),
    ("cornsilk", 0xFFFF_F8DC),
    ("crimson", 0xFFDC_143C),
    ("cyan", 0xFF00_FFFF),
    ("darkblue", 0xFF00_008B),
    ("darkcyan", 0xFF00_8B8B),
    ("darkgoldenrod", 0xFFB8_860B),
    ("darkgray", 0xFFA9_A9A9),
    ("darkgreen", 0xFF00_6400),
    ("darkkhaki", 0xFFBD_B76B),
    ("darkmagenta", 0xFF8B_008B),
    ("darkolivegreen", 0xFF55_6B2F),
    ("darkorange", 0xFFFF_8C00),
    ("darkorchid", 0xFF99_32CC),
    ("darkred", 0xFF8B_0000),
    ("darksalmon", 0xFFE9_967A),
    ("darkseagreen", 0xFF8F_BC8B),
    ("darkslateblue", 0xFF48_3D8B),
    ("darkslategray", 0xFF2F_4F4F),
    ("darkturquoise", 0xFF00_CED1),
    ("darkviolet", 0xFF94_00D3),
    ("deeppink", 0xFFFF_1493),
    ("deepskyblue", 0xFF00_BFFF),
    ("dimgray", 0xFF69_6969),
    ("dodgerblue", 0xFF1E_90FF),
    ("firebrick", 0xFFB2_2222),
    ("floralwhite", 0xFFFF_FAF0),
    ("forestgreen", 0xFF22_8B22),
    ("fuchsia", 0xFFFF_00FF),
    ("gainsboro", 0xFFDC_DCDC),
    ("ghostwhite", 0xFFF8_F8FF),
    ("gold", 0xFFFF_D700),
    ("goldenrod", 0xFFDA_A520),
    ("gray", 0xFF80_8080),
    ("green", 0xFF00_8000),
    ("greenyellow", 0xFFAD_FF2F),
    ("honeydew", 0xFFF0_FFF0),
    ("hotpink", 0xFFFF_69B4),
    ("indianred", 0xFFCD_5C5C),
    ("indigo", 0xFF4B_0082),
    ("ivory", 0xFFFF_FFF0),
    ("khaki", 0xFFF0_E68C),
    ("lavender", 0xFFE6_E6FA),
    ("lavenderblush", 0xFFFF_F0F5),
    ("lawngreen", 0xFF7C_FC00),
    ("lemonchiffon", 0xFFFF_FACD),
    ("lightblue", 0xFFAD_D8E6),
    ("lightcoral", 0xFFF0_8080),
    ("lightcyan", 0xFFE0_FFFF),
    ("lightgoldenrodyellow", 0xFFFA_FAD2),
    ("lightgray", 0xFFD3_D3D3),
    ("lightgreen", 0xFF90_EE90),
    ("lightpink", 0xFFFF_B6C1),
    ("lightsalmon", 0xFFFF_A07A),
    ("lightseagreen", 0xFF20_B2AA),
    ("lightskyblue", 0xFF87_CEFA),
    ("lightslategray", 0xFF77_8899),
    ("lightsteelblue", 0xFFB0_C4DE),
    ("lightyellow", 0xFFFF_FFE0),
    ("lime", 0xFF00_FF00),
    ("limegreen", 0xFF32_CD32),
    ("linen", 0xFFFA_F0E6),
    ("magenta", 0xFFFF_00FF),
    ("maroon", 0xFF80_0000),
    ("mediumaquamarine", 0xFF66_CDAA),
    ("mediumblue", 0xFF00_00CD),
    ("mediumorchid", 0xFFBA_55D3),
    ("mediumpurple", 0xFF93_70DB),
    ("mediumseagreen", 0xFF3C_B371),
    ("mediumslateblue", 0xFF7B_68EE),
    ("mediumspringgreen", 0xFF00_FA9A),
    ("mediumturquoise", 0xFF48_D1CC),
    ("mediumvioletred", 0xFFC7_1585),
    ("midnightblue", 0xFF19_1970),
    ("mintcream", 0xFFF5_FFFA),
    ("mistyrose", 0xFFFF_E4E1),
    ("moccasin", 0xFFFF_E4B5),
    ("navajowhite", 0xFFFF_DEAD),
    ("navy", 0xFF00_0080),
    ("oldlace", 0xFFFD_F5E6),
    ("olive", 0xFF80_8000),
    ("olivedrab", 0xFF6B_8E23),
    ("orange", 0xFFFF_A500),
    ("orangered", 0xFFFF_4500),
    ("orchid", 0xFFDA_70D6),
    ("palegoldenrod", 0xFFEE_E8AA),
    ("palegreen", 0xFF98_FB98),
    ("paleturquoise", 0xFFAF_EEEE),
    ("palevioletred", 0xFFDB_7093),
    ("papayawhip", 0xFFFF_EFD5),
    ("peachpuff", 0xFFFF_DAB9),
    ("peru", 0xFFCD_853F),
    ("pink", 0xFFFF_C0CB),
    ("plum", 0xFFDD_A0DD),
    ("powderblue", 0xFFB0_E0E6),
    ("purple", 0xFF80_0080),
    ("rebeccapurple", 0xFF66_3399),
    ("red", 0xFFFF_0000),
    ("rosybrown", 0xFFBC_8F8F),
    ("royalblue", 0xFF41_69E1),
    ("saddlebrown", 0xFF8B_4513),
    ("salmon", 0xFFFA_8072),
    ("sandybrown", 0xFFF4_A460),
    ("seagreen", 0xFF2E_8B57),
    ("seashell", 0xFFFF_F5EE),
    ("sienna", 0xFFA0_522D),
    ("silver", 0xFFC0_C0C0),
    ("skyblue", 0xFF87_CEEB),
    ("slateblue", 0xFF6A_5ACD),
    ("slategray", 0xFF70_8090),
    ("snow", 0xFFFF_FAFA),
    ("springgreen", 0xFF00_FF7F),
    ("steelblue", 0xFF46_82B4),
    ("tan", 0xFFD2_B48C),
    ("teal", 0xFF00_8080),
    ("thistle", 0xFFD8_BFD8),
    ("tomato", 0xFFFF_6347),
    ("turquoise", 0xFF40_E0D0),
    ("violet", 0xFFEE_82EE),
    ("wheat", 0xFFF5_DEB3),
    ("white", 0xFFFF_FFFF),
    ("whitesmoke", 0xFFF5_F5F5),
    ("yellow", 0xFFFF_FF00),
    ("yellowgreen", 0xFF9A_CD32),
];
