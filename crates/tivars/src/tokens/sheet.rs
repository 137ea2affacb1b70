//! Declarative token sheet for the TI-83/84 family.
//!
//! Each entry maps a one- or two-byte sequence to its display name (with the
//! calculator's glyphs), an accessible ASCII name, an optional French display
//! name, the first OS that recognizes it, and encoder flags. A byte sequence
//! listed twice is a rename: the later entry becomes the canonical name for
//! models new enough to have it, and the earlier names stay encodable.
//! [`ALTERNATES`] lists further spellings that only the encoder accepts.

use crate::model::{ModelId, OsVersion};
use crate::tokens::token::{TokenFlags, Trigger};

/// One row of the sheet.
#[derive(Debug, Clone, Copy)]
pub struct TokenSpec {
    pub bytes: &'static [u8],
    pub display: &'static str,
    pub accessible: &'static str,
    pub fr: Option<&'static str>,
    pub since: OsVersion,
    pub flags: TokenFlags,
}

impl TokenSpec {
    pub const fn new(
        bytes: &'static [u8],
        display: &'static str,
        accessible: &'static str,
        since: OsVersion,
    ) -> Self {
        Self {
            bytes,
            display,
            accessible,
            fr: None,
            since,
            flags: TokenFlags {
                closes_string: false,
                ends_line: false,
                trigger: None,
            },
        }
    }

    pub const fn fr(self, name: &'static str) -> Self {
        Self {
            fr: Some(name),
            ..self
        }
    }

    pub const fn ends_line(self) -> Self {
        Self {
            flags: TokenFlags {
                ends_line: true,
                ..self.flags
            },
            ..self
        }
    }

    pub const fn closes_string(self) -> Self {
        Self {
            flags: TokenFlags {
                closes_string: true,
                ..self.flags
            },
            ..self
        }
    }

    pub const fn opens(self, trigger: Trigger) -> Self {
        Self {
            flags: TokenFlags {
                trigger: Some(trigger),
                ..self.flags
            },
            ..self
        }
    }
}

/// An extra encodable spelling.
#[derive(Debug, Clone, Copy)]
pub struct Alternate {
    pub bytes: &'static [u8],
    pub name: &'static str,
}

/// A complete token definition.
#[derive(Debug, Clone, Copy)]
pub struct Sheet {
    pub tokens: &'static [TokenSpec],
    pub alternates: &'static [Alternate],
}

/// The sheet every model's table is built from.
pub static SHEET: Sheet = Sheet {
    tokens: TOKENS,
    alternates: ALTERNATES,
};

const BASE: OsVersion = OsVersion::initial(ModelId::Ti82);
const TI83: OsVersion = OsVersion::initial(ModelId::Ti83);
const TI83P: OsVersion = OsVersion::new(ModelId::Ti83P, 1, 0, 0);
const TI83P_115: OsVersion = OsVersion::new(ModelId::Ti83P, 1, 15, 0);
const TI83P_116: OsVersion = OsVersion::new(ModelId::Ti83P, 1, 16, 0);
const TI84P_221: OsVersion = OsVersion::new(ModelId::Ti84P, 2, 21, 0);
const TI84P_230: OsVersion = OsVersion::new(ModelId::Ti84P, 2, 30, 0);
const TI84P_253: OsVersion = OsVersion::new(ModelId::Ti84P, 2, 53, 0);
const TI84P_255: OsVersion = OsVersion::new(ModelId::Ti84P, 2, 55, 0);
const TI84PCSE: OsVersion = OsVersion::new(ModelId::Ti84PCse, 4, 0, 0);
const TI84PCE: OsVersion = OsVersion::new(ModelId::Ti84PCe, 5, 0, 0);
const TI84PCE_52: OsVersion = OsVersion::new(ModelId::Ti84PCe, 5, 2, 0);
const TI84PCE_53: OsVersion = OsVersion::new(ModelId::Ti84PCe, 5, 3, 0);

const fn s(bytes: &'static [u8], name: &'static str, since: OsVersion) -> TokenSpec {
    TokenSpec::new(bytes, name, name, since)
}

const fn t(
    bytes: &'static [u8],
    display: &'static str,
    accessible: &'static str,
    since: OsVersion,
) -> TokenSpec {
    TokenSpec::new(bytes, display, accessible, since)
}

static TOKENS: &[TokenSpec] = &[
    // === One-byte tokens ===
    t(&[0x01], "►DMS", ">DMS", BASE),
    t(&[0x02], "►Dec", ">Dec", BASE),
    t(&[0x03], "►Frac", ">Frac", BASE),
    t(&[0x04], "→", "->", BASE).ends_line(),
    s(&[0x05], "Boxplot", BASE),
    s(&[0x06], "[", BASE),
    s(&[0x07], "]", BASE),
    s(&[0x08], "{", BASE),
    s(&[0x09], "}", BASE),
    t(&[0x0A], "ʳ", "^^r", BASE),
    t(&[0x0B], "°", "^^o", BASE),
    t(&[0x0C], "⁻¹", "^^-1", BASE),
    t(&[0x0D], "²", "^^2", BASE),
    t(&[0x0E], "ᵀ", "^^T", BASE),
    t(&[0x0F], "³", "^^3", BASE),
    s(&[0x10], "(", BASE),
    s(&[0x11], ")", BASE),
    s(&[0x12], "round(", BASE),
    s(&[0x13], "pxl-Test(", BASE),
    s(&[0x14], "augment(", BASE),
    s(&[0x15], "rowSwap(", BASE),
    s(&[0x16], "row+(", BASE),
    s(&[0x17], "*row(", BASE),
    s(&[0x18], "*row+(", BASE),
    s(&[0x19], "max(", BASE),
    s(&[0x1A], "min(", BASE),
    t(&[0x1B], "R►Pr(", "R>Pr(", BASE),
    t(&[0x1C], "R►Pθ(", "R>Ptheta(", BASE),
    t(&[0x1D], "P►Rx(", "P>Rx(", BASE),
    t(&[0x1E], "P►Ry(", "P>Ry(", BASE),
    s(&[0x1F], "median(", BASE),
    s(&[0x20], "randM(", BASE),
    s(&[0x21], "mean(", BASE),
    s(&[0x22], "solve(", BASE),
    s(&[0x23], "seq(", BASE),
    s(&[0x24], "fnInt(", BASE),
    s(&[0x25], "nDeriv(", BASE),
    s(&[0x27], "fMin(", BASE),
    s(&[0x28], "fMax(", BASE),
    s(&[0x29], " ", BASE),
    s(&[0x2A], "\"", BASE)
        .opens(Trigger::String)
        .closes_string(),
    s(&[0x2B], ",", BASE),
    t(&[0x2C], "𝑖", "[i]", TI83),
    s(&[0x2D], "!", BASE),
    s(&[0x2E], "CubicReg ", BASE),
    s(&[0x2F], "QuartReg ", BASE),
    s(&[0x30], "0", BASE),
    s(&[0x31], "1", BASE),
    s(&[0x32], "2", BASE),
    s(&[0x33], "3", BASE),
    s(&[0x34], "4", BASE),
    s(&[0x35], "5", BASE),
    s(&[0x36], "6", BASE),
    s(&[0x37], "7", BASE),
    s(&[0x38], "8", BASE),
    s(&[0x39], "9", BASE),
    s(&[0x3A], ".", BASE),
    t(&[0x3B], "ᴇ", "|E", BASE),
    s(&[0x3C], " or ", BASE).fr(" ou "),
    s(&[0x3D], " xor ", BASE).fr(" ouExcl "),
    s(&[0x3E], ":", BASE),
    s(&[0x3F], "\n", BASE).ends_line(),
    s(&[0x40], " and ", BASE).fr(" et "),
    s(&[0x41], "A", BASE),
    s(&[0x42], "B", BASE),
    s(&[0x43], "C", BASE),
    s(&[0x44], "D", BASE),
    s(&[0x45], "E", BASE),
    s(&[0x46], "F", BASE),
    s(&[0x47], "G", BASE),
    s(&[0x48], "H", BASE),
    s(&[0x49], "I", BASE),
    s(&[0x4A], "J", BASE),
    s(&[0x4B], "K", BASE),
    s(&[0x4C], "L", BASE),
    s(&[0x4D], "M", BASE),
    s(&[0x4E], "N", BASE),
    s(&[0x4F], "O", BASE),
    s(&[0x50], "P", BASE),
    s(&[0x51], "Q", BASE),
    s(&[0x52], "R", BASE),
    s(&[0x53], "S", BASE),
    s(&[0x54], "T", BASE),
    s(&[0x55], "U", BASE),
    s(&[0x56], "V", BASE),
    s(&[0x57], "W", BASE),
    s(&[0x58], "X", BASE),
    s(&[0x59], "Y", BASE),
    s(&[0x5A], "Z", BASE),
    t(&[0x5B], "θ", "theta", BASE),
    s(&[0x5F], "prgm", BASE).opens(Trigger::ProgramName),
    s(&[0x64], "Radian", BASE),
    s(&[0x65], "Degree", BASE),
    s(&[0x66], "Normal", BASE),
    s(&[0x67], "Sci", BASE),
    s(&[0x68], "Eng", BASE),
    s(&[0x69], "Float", BASE),
    s(&[0x6A], "=", BASE),
    s(&[0x6B], "<", BASE),
    s(&[0x6C], ">", BASE),
    t(&[0x6D], "≤", "<=", BASE),
    t(&[0x6E], "≥", ">=", BASE),
    t(&[0x6F], "≠", "!=", BASE),
    s(&[0x70], "+", BASE),
    s(&[0x71], "-", BASE),
    s(&[0x72], "Ans", BASE),
    s(&[0x73], "Fix ", BASE),
    s(&[0x74], "Horiz", BASE),
    s(&[0x75], "Full", BASE),
    s(&[0x76], "Func", BASE),
    s(&[0x77], "Param", BASE),
    s(&[0x78], "Polar", BASE),
    s(&[0x79], "Seq", BASE),
    s(&[0x7A], "IndpntAuto", BASE),
    s(&[0x7B], "IndpntAsk", BASE),
    s(&[0x7C], "DependAuto", BASE),
    s(&[0x7D], "DependAsk", BASE),
    t(&[0x7F], "□", "[box]", BASE),
    t(&[0x80], "﹢", "[cross]", BASE),
    t(&[0x81], "·", "[dot]", BASE),
    s(&[0x82], "*", BASE),
    s(&[0x83], "/", BASE),
    s(&[0x84], "Trace", BASE),
    s(&[0x85], "ClrDraw", BASE).fr("EffDessin"),
    s(&[0x86], "ZStandard", BASE),
    s(&[0x87], "ZTrig", BASE),
    s(&[0x88], "ZBox", BASE),
    s(&[0x89], "Zoom In", BASE),
    s(&[0x8A], "Zoom Out", BASE),
    s(&[0x8B], "ZSquare", BASE),
    s(&[0x8C], "ZInteger", BASE),
    s(&[0x8D], "ZPrevious", BASE),
    s(&[0x8E], "ZDecimal", BASE),
    s(&[0x8F], "ZoomStat", BASE),
    s(&[0x90], "ZoomRcl", BASE),
    s(&[0x91], "PrintScreen", BASE),
    s(&[0x92], "ZoomSto", BASE),
    s(&[0x93], "Text(", BASE),
    s(&[0x94], " nPr ", BASE),
    s(&[0x95], " nCr ", BASE),
    s(&[0x96], "FnOn ", BASE),
    s(&[0x97], "FnOff ", BASE),
    s(&[0x98], "StorePic ", BASE),
    s(&[0x99], "RecallPic ", BASE),
    s(&[0x9A], "StoreGDB ", BASE),
    s(&[0x9B], "RecallGDB ", BASE),
    s(&[0x9C], "Line(", BASE),
    s(&[0x9D], "Vertical ", BASE),
    s(&[0x9E], "Pt-On(", BASE),
    s(&[0x9F], "Pt-Off(", BASE),
    s(&[0xA0], "Pt-Change(", BASE),
    s(&[0xA1], "Pxl-On(", BASE),
    s(&[0xA2], "Pxl-Off(", BASE),
    s(&[0xA3], "Pxl-Change(", BASE),
    s(&[0xA4], "Shade(", BASE),
    s(&[0xA5], "Circle(", BASE),
    s(&[0xA6], "Horizontal ", BASE),
    s(&[0xA7], "Tangent(", BASE),
    s(&[0xA8], "DrawInv ", BASE),
    s(&[0xA9], "DrawF ", BASE),
    s(&[0xAB], "rand", BASE).fr("NbrAléat"),
    t(&[0xAC], "π", "pi", BASE),
    s(&[0xAD], "getKey", BASE).fr("codeTouch"),
    s(&[0xAE], "'", BASE),
    s(&[0xAF], "?", BASE),
    t(&[0xB0], "⁻", "~", BASE),
    s(&[0xB1], "int(", BASE).fr("partEnt("),
    s(&[0xB2], "abs(", BASE),
    s(&[0xB3], "det(", BASE),
    s(&[0xB4], "identity(", BASE),
    s(&[0xB5], "dim(", BASE),
    s(&[0xB6], "sum(", BASE),
    s(&[0xB7], "prod(", BASE),
    s(&[0xB8], "not(", BASE).fr("non("),
    s(&[0xB9], "iPart(", BASE),
    s(&[0xBA], "fPart(", BASE),
    t(&[0xBC], "√(", "sqrt(", BASE),
    t(&[0xBD], "³√(", "cuberoot(", BASE),
    s(&[0xBE], "ln(", BASE),
    t(&[0xBF], "e^(", "e^(", BASE),
    s(&[0xC0], "log(", BASE),
    t(&[0xC1], "₁₀^(", "10^(", BASE),
    s(&[0xC2], "sin(", BASE),
    t(&[0xC3], "sin⁻¹(", "sin^-1(", BASE),
    s(&[0xC4], "cos(", BASE),
    t(&[0xC5], "cos⁻¹(", "cos^-1(", BASE),
    s(&[0xC6], "tan(", BASE),
    t(&[0xC7], "tan⁻¹(", "tan^-1(", BASE),
    s(&[0xC8], "sinh(", BASE),
    t(&[0xC9], "sinh⁻¹(", "sinh^-1(", BASE),
    s(&[0xCA], "cosh(", BASE),
    t(&[0xCB], "cosh⁻¹(", "cosh^-1(", BASE),
    s(&[0xCC], "tanh(", BASE),
    t(&[0xCD], "tanh⁻¹(", "tanh^-1(", BASE),
    s(&[0xCE], "If ", BASE).fr("Si "),
    s(&[0xCF], "Then", BASE).fr("Alors"),
    s(&[0xD0], "Else", BASE).fr("Sinon"),
    s(&[0xD1], "While ", BASE).fr("TantQue "),
    s(&[0xD2], "Repeat ", BASE).fr("Répéter "),
    s(&[0xD3], "For(", BASE).fr("Pour("),
    s(&[0xD4], "End", BASE).fr("Fin"),
    s(&[0xD5], "Return", BASE).fr("Retour"),
    s(&[0xD6], "Lbl ", BASE),
    s(&[0xD7], "Goto ", BASE),
    s(&[0xD8], "Pause ", BASE),
    s(&[0xD9], "Stop", BASE),
    s(&[0xDA], "IS>(", BASE),
    s(&[0xDB], "DS<(", BASE),
    s(&[0xDC], "Input ", BASE),
    s(&[0xDD], "Prompt ", BASE),
    s(&[0xDE], "Disp ", BASE),
    s(&[0xDF], "DispGraph", BASE).fr("AffGraph"),
    s(&[0xE0], "Output(", BASE),
    s(&[0xE1], "ClrHome", BASE).fr("EffÉcr"),
    s(&[0xE2], "Fill(", BASE),
    s(&[0xE3], "SortA(", BASE),
    s(&[0xE4], "SortD(", BASE),
    s(&[0xE5], "DispTable", BASE).fr("AffTable"),
    s(&[0xE6], "Menu(", BASE),
    s(&[0xE7], "Send(", BASE).opens(Trigger::Interpolation),
    s(&[0xE8], "Get(", BASE).opens(Trigger::Interpolation),
    s(&[0xE9], "PlotsOn ", BASE),
    s(&[0xEA], "PlotsOff ", BASE),
    t(&[0xEB], "ʟ", "|L", BASE).opens(Trigger::ListName),
    s(&[0xEC], "Plot1(", BASE),
    s(&[0xED], "Plot2(", BASE),
    s(&[0xEE], "Plot3(", BASE),
    s(&[0xF0], "^", BASE),
    t(&[0xF1], "×√", "xroot", BASE),
    s(&[0xF2], "1-Var Stats ", BASE),
    s(&[0xF3], "2-Var Stats ", BASE),
    s(&[0xF4], "LinReg(a+bx) ", BASE),
    s(&[0xF5], "ExpReg ", BASE),
    s(&[0xF6], "LnReg ", BASE),
    s(&[0xF7], "PwrReg ", BASE),
    s(&[0xF8], "Med-Med ", BASE),
    s(&[0xF9], "QuadReg ", BASE),
    s(&[0xFA], "ClrList ", BASE),
    s(&[0xFB], "ClrTable", BASE),
    s(&[0xFC], "Histogram", BASE),
    s(&[0xFD], "xyLine", BASE),
    s(&[0xFE], "Scatter", BASE),
    s(&[0xFF], "LinReg(ax+b) ", BASE),
    // === Matrices (5C) ===
    s(&[0x5C, 0x00], "[A]", BASE),
    s(&[0x5C, 0x01], "[B]", BASE),
    s(&[0x5C, 0x02], "[C]", BASE),
    s(&[0x5C, 0x03], "[D]", BASE),
    s(&[0x5C, 0x04], "[E]", BASE),
    s(&[0x5C, 0x05], "[F]", BASE),
    s(&[0x5C, 0x06], "[G]", BASE),
    s(&[0x5C, 0x07], "[H]", BASE),
    s(&[0x5C, 0x08], "[I]", BASE),
    s(&[0x5C, 0x09], "[J]", BASE),
    // === Lists (5D) ===
    t(&[0x5D, 0x00], "L₁", "L1", BASE),
    t(&[0x5D, 0x01], "L₂", "L2", BASE),
    t(&[0x5D, 0x02], "L₃", "L3", BASE),
    t(&[0x5D, 0x03], "L₄", "L4", BASE),
    t(&[0x5D, 0x04], "L₅", "L5", BASE),
    t(&[0x5D, 0x05], "L₆", "L6", BASE),
    // === Equations (5E) ===
    t(&[0x5E, 0x10], "Y₁", "Y1", BASE),
    t(&[0x5E, 0x11], "Y₂", "Y2", BASE),
    t(&[0x5E, 0x12], "Y₃", "Y3", BASE),
    t(&[0x5E, 0x13], "Y₄", "Y4", BASE),
    t(&[0x5E, 0x14], "Y₅", "Y5", BASE),
    t(&[0x5E, 0x15], "Y₆", "Y6", BASE),
    t(&[0x5E, 0x16], "Y₇", "Y7", BASE),
    t(&[0x5E, 0x17], "Y₈", "Y8", BASE),
    t(&[0x5E, 0x18], "Y₉", "Y9", BASE),
    t(&[0x5E, 0x19], "Y₀", "Y0", BASE),
    t(&[0x5E, 0x20], "X₁ᴛ", "X1T", BASE),
    t(&[0x5E, 0x21], "Y₁ᴛ", "Y1T", BASE),
    t(&[0x5E, 0x22], "X₂ᴛ", "X2T", BASE),
    t(&[0x5E, 0x23], "Y₂ᴛ", "Y2T", BASE),
    t(&[0x5E, 0x24], "X₃ᴛ", "X3T", BASE),
    t(&[0x5E, 0x25], "Y₃ᴛ", "Y3T", BASE),
    t(&[0x5E, 0x26], "X₄ᴛ", "X4T", BASE),
    t(&[0x5E, 0x27], "Y₄ᴛ", "Y4T", BASE),
    t(&[0x5E, 0x28], "X₅ᴛ", "X5T", BASE),
    t(&[0x5E, 0x29], "Y₅ᴛ", "Y5T", BASE),
    t(&[0x5E, 0x2A], "X₆ᴛ", "X6T", BASE),
    t(&[0x5E, 0x2B], "Y₆ᴛ", "Y6T", BASE),
    t(&[0x5E, 0x40], "r₁", "r1", BASE),
    t(&[0x5E, 0x41], "r₂", "r2", BASE),
    t(&[0x5E, 0x42], "r₃", "r3", BASE),
    t(&[0x5E, 0x43], "r₄", "r4", BASE),
    t(&[0x5E, 0x44], "r₅", "r5", BASE),
    t(&[0x5E, 0x45], "r₆", "r6", BASE),
    t(&[0x5E, 0x80], "𝑢", "|u", BASE),
    t(&[0x5E, 0x81], "𝑣", "|v", BASE),
    t(&[0x5E, 0x82], "𝑤", "|w", TI83),
    // === Pictures (60) ===
    s(&[0x60, 0x00], "Pic1", BASE),
    s(&[0x60, 0x01], "Pic2", BASE),
    s(&[0x60, 0x02], "Pic3", BASE),
    s(&[0x60, 0x03], "Pic4", BASE),
    s(&[0x60, 0x04], "Pic5", BASE),
    s(&[0x60, 0x05], "Pic6", BASE),
    s(&[0x60, 0x06], "Pic7", BASE),
    s(&[0x60, 0x07], "Pic8", BASE),
    s(&[0x60, 0x08], "Pic9", BASE),
    s(&[0x60, 0x09], "Pic0", BASE),
    // === Graph databases (61) ===
    s(&[0x61, 0x00], "GDB1", BASE),
    s(&[0x61, 0x01], "GDB2", BASE),
    s(&[0x61, 0x02], "GDB3", BASE),
    s(&[0x61, 0x03], "GDB4", BASE),
    s(&[0x61, 0x04], "GDB5", BASE),
    s(&[0x61, 0x05], "GDB6", BASE),
    s(&[0x61, 0x06], "GDB7", BASE),
    s(&[0x61, 0x07], "GDB8", BASE),
    s(&[0x61, 0x08], "GDB9", BASE),
    s(&[0x61, 0x09], "GDB0", BASE),
    // === Statistics variables (62) ===
    s(&[0x62, 0x01], "RegEQ", BASE),
    t(&[0x62, 0x02], "𝑛", "[n]", BASE),
    t(&[0x62, 0x03], "x̄", "[xbar]", BASE),
    t(&[0x62, 0x04], "Σx", "[Sigmax]", BASE),
    t(&[0x62, 0x05], "Σx²", "[Sigmax^2]", BASE),
    t(&[0x62, 0x06], "Sx", "[Sx]", BASE),
    t(&[0x62, 0x07], "σx", "[sigmax]", BASE),
    s(&[0x62, 0x08], "minX", BASE),
    s(&[0x62, 0x09], "maxX", BASE),
    s(&[0x62, 0x0A], "minY", BASE),
    s(&[0x62, 0x0B], "maxY", BASE),
    t(&[0x62, 0x0C], "ȳ", "[ybar]", BASE),
    t(&[0x62, 0x0D], "Σy", "[Sigmay]", BASE),
    t(&[0x62, 0x0E], "Σy²", "[Sigmay^2]", BASE),
    t(&[0x62, 0x0F], "Sy", "[Sy]", BASE),
    t(&[0x62, 0x10], "σy", "[sigmay]", BASE),
    t(&[0x62, 0x11], "Σxy", "[Sigmaxy]", BASE),
    t(&[0x62, 0x12], "𝑟", "[r]", BASE),
    s(&[0x62, 0x13], "Med", BASE),
    t(&[0x62, 0x14], "Q₁", "Q1", BASE),
    t(&[0x62, 0x15], "Q₃", "Q3", BASE),
    t(&[0x62, 0x16], "𝗮", "|a", BASE),
    t(&[0x62, 0x17], "𝗯", "|b", BASE),
    t(&[0x62, 0x18], "𝗰", "|c", BASE),
    t(&[0x62, 0x19], "𝗱", "|d", BASE),
    t(&[0x62, 0x1A], "𝗲", "|e", BASE),
    t(&[0x62, 0x1B], "x₁", "x1", BASE),
    t(&[0x62, 0x1C], "x₂", "x2", BASE),
    t(&[0x62, 0x1D], "x₃", "x3", BASE),
    t(&[0x62, 0x1E], "y₁", "y1", BASE),
    t(&[0x62, 0x1F], "y₂", "y2", BASE),
    t(&[0x62, 0x20], "y₃", "y3", BASE),
    t(&[0x62, 0x22], "p̂", "[phat]", TI83),
    t(&[0x62, 0x23], "𝗓", "[z]", TI83),
    t(&[0x62, 0x24], "𝗍", "[t]", TI83),
    t(&[0x62, 0x25], "χ²", "[chi^2]", TI83),
    t(&[0x62, 0x2A], "df", "[df]", TI83),
    t(&[0x62, 0x2D], "R²", "[R^2]", TI83),
    t(&[0x62, 0x34], "𝑟²", "[r^2]", TI83),
    // === Window and finance variables (63) ===
    s(&[0x63, 0x00], "ZXscl", BASE),
    s(&[0x63, 0x01], "ZYscl", BASE),
    s(&[0x63, 0x02], "Xscl", BASE),
    s(&[0x63, 0x03], "Yscl", BASE),
    t(&[0x63, 0x04], "𝑢(𝑛Min)", "u(nMin)", BASE),
    t(&[0x63, 0x05], "𝑣(𝑛Min)", "v(nMin)", BASE),
    t(&[0x63, 0x06], "𝑢(𝑛-1)", "u(n-1)", BASE),
    t(&[0x63, 0x07], "𝑣(𝑛-1)", "v(n-1)", BASE),
    t(&[0x63, 0x08], "Z𝑢(𝑛Min)", "Zu(nMin)", BASE),
    t(&[0x63, 0x09], "Z𝑣(𝑛Min)", "Zv(nMin)", BASE),
    s(&[0x63, 0x0A], "Xmin", BASE),
    s(&[0x63, 0x0B], "Xmax", BASE),
    s(&[0x63, 0x0C], "Ymin", BASE),
    s(&[0x63, 0x0D], "Ymax", BASE),
    s(&[0x63, 0x0E], "Tmin", BASE),
    s(&[0x63, 0x0F], "Tmax", BASE),
    t(&[0x63, 0x10], "θmin", "thetamin", BASE),
    t(&[0x63, 0x11], "θmax", "thetamax", BASE),
    s(&[0x63, 0x12], "ZXmin", BASE),
    s(&[0x63, 0x13], "ZXmax", BASE),
    s(&[0x63, 0x14], "ZYmin", BASE),
    s(&[0x63, 0x15], "ZYmax", BASE),
    t(&[0x63, 0x16], "Zθmin", "Zthetamin", BASE),
    t(&[0x63, 0x17], "Zθmax", "Zthetamax", BASE),
    s(&[0x63, 0x18], "ZTmin", BASE),
    s(&[0x63, 0x19], "ZTmax", BASE),
    s(&[0x63, 0x1A], "TblStart", BASE),
    t(&[0x63, 0x1B], "𝑛Min", "nMin", BASE),
    t(&[0x63, 0x1C], "Z𝑛Min", "ZnMin", BASE),
    t(&[0x63, 0x1D], "𝑛Max", "nMax", BASE),
    t(&[0x63, 0x1E], "Z𝑛Max", "ZnMax", BASE),
    s(&[0x63, 0x1F], "PlotStart", BASE),
    s(&[0x63, 0x20], "ZPlotStart", BASE),
    t(&[0x63, 0x21], "ΔTbl", "DeltaTbl", BASE),
    s(&[0x63, 0x22], "Tstep", BASE),
    t(&[0x63, 0x23], "θstep", "thetastep", BASE),
    s(&[0x63, 0x24], "ZTstep", BASE),
    t(&[0x63, 0x25], "Zθstep", "Zthetastep", BASE),
    t(&[0x63, 0x26], "ΔX", "DeltaX", BASE),
    t(&[0x63, 0x27], "ΔY", "DeltaY", BASE),
    s(&[0x63, 0x28], "XFact", BASE),
    s(&[0x63, 0x29], "YFact", BASE),
    s(&[0x63, 0x2A], "TblInput", TI83),
    t(&[0x63, 0x2B], "𝗡", "[N]", TI83),
    s(&[0x63, 0x2C], "I%", TI83),
    s(&[0x63, 0x2D], "PV", TI83),
    s(&[0x63, 0x2E], "PMT", TI83),
    s(&[0x63, 0x2F], "FV", TI83),
    s(&[0x63, 0x30], "P/Y", TI83),
    s(&[0x63, 0x31], "C/Y", TI83),
    t(&[0x63, 0x32], "𝑤(𝑛Min)", "w(nMin)", TI83),
    t(&[0x63, 0x33], "Z𝑤(𝑛Min)", "Zw(nMin)", TI83),
    s(&[0x63, 0x34], "PlotStep", TI83),
    s(&[0x63, 0x35], "ZPlotStep", TI83),
    s(&[0x63, 0x36], "Xres", TI83),
    s(&[0x63, 0x37], "ZXres", TI83),
    s(&[0x63, 0x38], "TraceStep", TI84P_255),
    // === Graph format (7E) ===
    s(&[0x7E, 0x00], "Sequential", BASE),
    s(&[0x7E, 0x01], "Simul", BASE),
    s(&[0x7E, 0x02], "PolarGC", BASE),
    s(&[0x7E, 0x03], "RectGC", BASE),
    s(&[0x7E, 0x04], "CoordOn", BASE),
    s(&[0x7E, 0x05], "CoordOff", BASE),
    s(&[0x7E, 0x06], "Connected", BASE),
    s(&[0x7E, 0x07], "Dot", BASE),
    s(&[0x7E, 0x08], "AxesOn", BASE),
    s(&[0x7E, 0x09], "AxesOff", BASE),
    s(&[0x7E, 0x0A], "GridOn", BASE),
    s(&[0x7E, 0x0B], "GridOff", BASE),
    s(&[0x7E, 0x0C], "LabelOn", BASE),
    s(&[0x7E, 0x0D], "LabelOff", BASE),
    s(&[0x7E, 0x0E], "Web", BASE),
    s(&[0x7E, 0x0F], "Time", BASE),
    s(&[0x7E, 0x10], "uvAxes", BASE),
    s(&[0x7E, 0x11], "vwAxes", TI83),
    s(&[0x7E, 0x12], "uwAxes", TI83),
    // === Strings (AA) ===
    s(&[0xAA, 0x00], "Str1", TI83),
    s(&[0xAA, 0x01], "Str2", TI83),
    s(&[0xAA, 0x02], "Str3", TI83),
    s(&[0xAA, 0x03], "Str4", TI83),
    s(&[0xAA, 0x04], "Str5", TI83),
    s(&[0xAA, 0x05], "Str6", TI83),
    s(&[0xAA, 0x06], "Str7", TI83),
    s(&[0xAA, 0x07], "Str8", TI83),
    s(&[0xAA, 0x08], "Str9", TI83),
    s(&[0xAA, 0x09], "Str0", TI83),
    // === Extended commands (BB) ===
    s(&[0xBB, 0x00], "npv(", TI83),
    s(&[0xBB, 0x01], "irr(", TI83),
    s(&[0xBB, 0x02], "bal(", TI83),
    t(&[0xBB, 0x03], "ΣPrn(", "SigmaPrn(", TI83),
    t(&[0xBB, 0x04], "ΣInt(", "SigmaInt(", TI83),
    t(&[0xBB, 0x05], "►Nom(", ">Nom(", TI83),
    t(&[0xBB, 0x06], "►Eff(", ">Eff(", TI83),
    s(&[0xBB, 0x07], "dbd(", TI83),
    s(&[0xBB, 0x08], "lcm(", TI83),
    s(&[0xBB, 0x09], "gcd(", TI83),
    s(&[0xBB, 0x0A], "randInt(", TI83).fr("entAléat("),
    s(&[0xBB, 0x0B], "randBin(", TI83),
    s(&[0xBB, 0x0C], "sub(", TI83),
    s(&[0xBB, 0x0D], "stdDev(", TI83),
    s(&[0xBB, 0x0E], "variance(", TI83),
    s(&[0xBB, 0x0F], "inString(", TI83),
    s(&[0xBB, 0x10], "normalcdf(", TI83),
    s(&[0xBB, 0x11], "invNorm(", TI83),
    s(&[0xBB, 0x12], "tcdf(", TI83),
    t(&[0xBB, 0x13], "χ²cdf(", "chi^2cdf(", TI83),
    t(&[0xBB, 0x14], "𝙵cdf(", "Fcdf(", TI83),
    s(&[0xBB, 0x15], "binompdf(", TI83),
    s(&[0xBB, 0x16], "binomcdf(", TI83),
    s(&[0xBB, 0x17], "poissonpdf(", TI83),
    s(&[0xBB, 0x18], "poissoncdf(", TI83),
    s(&[0xBB, 0x19], "geometpdf(", TI83),
    s(&[0xBB, 0x1A], "geometcdf(", TI83),
    s(&[0xBB, 0x1B], "normalpdf(", TI83),
    s(&[0xBB, 0x1C], "tpdf(", TI83),
    t(&[0xBB, 0x1D], "χ²pdf(", "chi^2pdf(", TI83),
    t(&[0xBB, 0x1E], "𝙵pdf(", "Fpdf(", TI83),
    s(&[0xBB, 0x1F], "randNorm(", TI83),
    s(&[0xBB, 0x20], "tvm_Pmt", TI83),
    s(&[0xBB, 0x21], "tvm_I%", TI83),
    s(&[0xBB, 0x22], "tvm_PV", TI83),
    s(&[0xBB, 0x23], "tvm_N", TI83),
    s(&[0xBB, 0x24], "tvm_FV", TI83),
    s(&[0xBB, 0x25], "conj(", TI83),
    s(&[0xBB, 0x26], "real(", TI83),
    s(&[0xBB, 0x27], "imag(", TI83),
    s(&[0xBB, 0x28], "angle(", TI83),
    s(&[0xBB, 0x29], "cumSum(", TI83),
    s(&[0xBB, 0x2A], "expr(", TI83),
    s(&[0xBB, 0x2B], "length(", TI83),
    t(&[0xBB, 0x2C], "ΔList(", "DeltaList(", TI83),
    s(&[0xBB, 0x2D], "ref(", TI83),
    s(&[0xBB, 0x2E], "rref(", TI83),
    t(&[0xBB, 0x2F], "►Rect", ">Rect", TI83),
    t(&[0xBB, 0x30], "►Polar", ">Polar", TI83),
    t(&[0xBB, 0x31], "𝑒", "[e]", TI83),
    s(&[0xBB, 0x32], "SinReg ", TI83),
    s(&[0xBB, 0x33], "Logistic ", TI83),
    s(&[0xBB, 0x34], "LinRegTTest ", TI83),
    s(&[0xBB, 0x35], "ShadeNorm(", TI83),
    s(&[0xBB, 0x36], "Shade_t(", TI83),
    t(&[0xBB, 0x37], "Shadeχ²(", "Shadechi^2(", TI83),
    t(&[0xBB, 0x38], "Shade𝙵(", "ShadeF(", TI83),
    t(&[0xBB, 0x39], "Matr►list(", "Matr>list(", TI83),
    t(&[0xBB, 0x3A], "List►matr(", "List>matr(", TI83),
    s(&[0xBB, 0x3B], "Z-Test(", TI83),
    s(&[0xBB, 0x3C], "T-Test ", TI83),
    s(&[0xBB, 0x3D], "2-SampZTest(", TI83),
    s(&[0xBB, 0x3E], "1-PropZTest(", TI83),
    s(&[0xBB, 0x3F], "2-PropZTest(", TI83),
    t(&[0xBB, 0x40], "χ²-Test(", "chi^2-Test(", TI83),
    s(&[0xBB, 0x41], "ZInterval ", TI83),
    s(&[0xBB, 0x42], "2-SampZInt(", TI83),
    s(&[0xBB, 0x43], "1-PropZInt(", TI83),
    s(&[0xBB, 0x44], "2-PropZInt(", TI83),
    s(&[0xBB, 0x45], "GraphStyle(", TI83),
    s(&[0xBB, 0x46], "2-SampTTest ", TI83),
    t(&[0xBB, 0x47], "2-Samp𝙵Test ", "2-SampFTest ", TI83),
    s(&[0xBB, 0x48], "TInterval ", TI83),
    s(&[0xBB, 0x49], "2-SampTInt ", TI83),
    s(&[0xBB, 0x4A], "SetUpEditor ", TI83),
    s(&[0xBB, 0x4B], "Pmt_End", TI83),
    s(&[0xBB, 0x4C], "Pmt_Bgn", TI83),
    s(&[0xBB, 0x4D], "Real", TI83),
    t(&[0xBB, 0x4E], "𝑟𝑒^θ𝑖", "re^thetai", TI83),
    t(&[0xBB, 0x4F], "𝑎+𝑏𝑖", "a+bi", TI83),
    s(&[0xBB, 0x50], "ExprOn", TI83),
    s(&[0xBB, 0x51], "ExprOff", TI83),
    s(&[0xBB, 0x52], "ClrAllLists", TI83),
    s(&[0xBB, 0x53], "GetCalc(", TI83),
    s(&[0xBB, 0x54], "DelVar ", TI83),
    t(&[0xBB, 0x55], "Equ►String(", "Equ>String(", TI83),
    t(&[0xBB, 0x56], "String►Equ(", "String>Equ(", TI83),
    s(&[0xBB, 0x57], "Clear Entries", TI83),
    s(&[0xBB, 0x58], "Select(", TI83),
    s(&[0xBB, 0x59], "ANOVA(", TI83),
    s(&[0xBB, 0x5A], "ModBoxplot", TI83),
    s(&[0xBB, 0x5B], "NormProbPlot", TI83),
    s(&[0xBB, 0x64], "G-T", TI83),
    s(&[0xBB, 0x65], "ZoomFit", TI83),
    s(&[0xBB, 0x66], "DiagnosticOn", TI83),
    s(&[0xBB, 0x67], "DiagnosticOff", TI83),
    s(&[0xBB, 0x68], "Archive ", TI83P),
    s(&[0xBB, 0x69], "UnArchive ", TI83P),
    s(&[0xBB, 0x6A], "Asm(", TI83P),
    s(&[0xBB, 0x6B], "AsmComp(", TI83P),
    s(&[0xBB, 0x6C], "AsmPrgm", TI83P),
    s(&[0xBB, 0x6D], "Asm83PCmp", TI83P),
    s(&[0xBB, 0x6E], "Á", TI83P_115),
    s(&[0xBB, 0x6F], "À", TI83P_115),
    s(&[0xBB, 0x70], "Â", TI83P_115),
    s(&[0xBB, 0x71], "Ä", TI83P_115),
    s(&[0xBB, 0x72], "á", TI83P_115),
    s(&[0xBB, 0x73], "à", TI83P_115),
    s(&[0xBB, 0x74], "â", TI83P_115),
    s(&[0xBB, 0x75], "ä", TI83P_115),
    s(&[0xBB, 0x76], "É", TI83P_115),
    s(&[0xBB, 0x77], "È", TI83P_115),
    s(&[0xBB, 0x78], "Ê", TI83P_115),
    s(&[0xBB, 0x79], "Ë", TI83P_115),
    s(&[0xBB, 0x7A], "é", TI83P_115),
    s(&[0xBB, 0x7B], "è", TI83P_115),
    s(&[0xBB, 0x7C], "ê", TI83P_115),
    s(&[0xBB, 0x7D], "ë", TI83P_115),
    s(&[0xBB, 0x7F], "Ì", TI83P_115),
    s(&[0xBB, 0x80], "Í", TI83P_115),
    s(&[0xBB, 0x81], "Î", TI83P_115),
    s(&[0xBB, 0x82], "Ï", TI83P_115),
    s(&[0xBB, 0x83], "í", TI83P_115),
    s(&[0xBB, 0x84], "ì", TI83P_115),
    s(&[0xBB, 0x85], "î", TI83P_115),
    s(&[0xBB, 0x86], "ï", TI83P_115),
    s(&[0xBB, 0x87], "Ó", TI83P_115),
    s(&[0xBB, 0x88], "Ò", TI83P_115),
    s(&[0xBB, 0x89], "Ô", TI83P_115),
    s(&[0xBB, 0x8A], "Ö", TI83P_115),
    s(&[0xBB, 0x8B], "ó", TI83P_115),
    s(&[0xBB, 0x8C], "ò", TI83P_115),
    s(&[0xBB, 0x8D], "ô", TI83P_115),
    s(&[0xBB, 0x8E], "ö", TI83P_115),
    s(&[0xBB, 0x8F], "Ú", TI83P_115),
    s(&[0xBB, 0x90], "Ù", TI83P_115),
    s(&[0xBB, 0x91], "Û", TI83P_115),
    s(&[0xBB, 0x92], "Ü", TI83P_115),
    s(&[0xBB, 0x93], "ú", TI83P_115),
    s(&[0xBB, 0x94], "ù", TI83P_115),
    s(&[0xBB, 0x95], "û", TI83P_115),
    s(&[0xBB, 0x96], "ü", TI83P_115),
    s(&[0xBB, 0x97], "Ç", TI83P_115),
    s(&[0xBB, 0x98], "ç", TI83P_115),
    s(&[0xBB, 0x99], "Ñ", TI83P_115),
    s(&[0xBB, 0x9A], "ñ", TI83P_115),
    s(&[0xBB, 0x9B], "´", TI83P_115),
    s(&[0xBB, 0x9C], "ˋ", TI83P_115),
    s(&[0xBB, 0x9D], "¨", TI83P_115),
    s(&[0xBB, 0x9E], "¿", TI83P_115),
    s(&[0xBB, 0x9F], "¡", TI83P_115),
    s(&[0xBB, 0xA0], "α", TI83P_115),
    s(&[0xBB, 0xA1], "β", TI83P_115),
    s(&[0xBB, 0xA2], "γ", TI83P_115),
    s(&[0xBB, 0xA3], "Δ", TI83P_115),
    s(&[0xBB, 0xA4], "δ", TI83P_115),
    s(&[0xBB, 0xA5], "ε", TI83P_115),
    s(&[0xBB, 0xA6], "λ", TI83P_115),
    s(&[0xBB, 0xA7], "μ", TI83P_115),
    s(&[0xBB, 0xA9], "ρ", TI83P_115),
    s(&[0xBB, 0xAA], "Σ", TI83P_115),
    s(&[0xBB, 0xAC], "Φ", TI83P_115),
    s(&[0xBB, 0xAD], "Ω", TI83P_115),
    t(&[0xBB, 0xAE], "ṗ", "[p]", TI83P_115),
    s(&[0xBB, 0xAF], "χ", TI83P_115),
    s(&[0xBB, 0xB0], "a", TI83),
    s(&[0xBB, 0xB1], "b", TI83),
    s(&[0xBB, 0xB2], "c", TI83),
    s(&[0xBB, 0xB3], "d", TI83),
    s(&[0xBB, 0xB4], "e", TI83),
    s(&[0xBB, 0xB5], "f", TI83),
    s(&[0xBB, 0xB6], "g", TI83),
    s(&[0xBB, 0xB7], "h", TI83),
    s(&[0xBB, 0xB8], "i", TI83),
    s(&[0xBB, 0xB9], "j", TI83),
    s(&[0xBB, 0xBA], "k", TI83),
    s(&[0xBB, 0xBC], "l", TI83),
    s(&[0xBB, 0xBD], "m", TI83),
    s(&[0xBB, 0xBE], "n", TI83),
    s(&[0xBB, 0xBF], "o", TI83),
    s(&[0xBB, 0xC0], "p", TI83),
    s(&[0xBB, 0xC1], "q", TI83),
    s(&[0xBB, 0xC2], "r", TI83),
    s(&[0xBB, 0xC3], "s", TI83),
    s(&[0xBB, 0xC4], "t", TI83),
    s(&[0xBB, 0xC5], "u", TI83),
    s(&[0xBB, 0xC6], "v", TI83),
    s(&[0xBB, 0xC7], "w", TI83),
    s(&[0xBB, 0xC8], "x", TI83),
    s(&[0xBB, 0xC9], "y", TI83),
    s(&[0xBB, 0xCA], "z", TI83),
    s(&[0xBB, 0xCB], "σ", TI83P_115),
    s(&[0xBB, 0xCC], "τ", TI83P_115),
    s(&[0xBB, 0xCE], "GarbageCollect", TI83P_115),
    s(&[0xBB, 0xD1], "@", TI83P_115),
    s(&[0xBB, 0xD2], "#", TI83P_115),
    s(&[0xBB, 0xD3], "$", TI83P_115),
    s(&[0xBB, 0xD4], "&", TI83P_115),
    s(&[0xBB, 0xD5], "`", TI83P_115),
    s(&[0xBB, 0xD6], ";", TI83P_115),
    s(&[0xBB, 0xD7], "\\", TI83P_115),
    s(&[0xBB, 0xD8], "|", TI83P_115),
    s(&[0xBB, 0xD9], "_", TI83P_115),
    s(&[0xBB, 0xDA], "%", TI83P_115),
    t(&[0xBB, 0xDB], "…", "...", TI83P_115),
    t(&[0xBB, 0xDC], "∠", "[angle]", TI83P_115),
    t(&[0xBB, 0xDD], "ß", "[ss]", TI83P_115),
    t(&[0xBB, 0xDE], "ˣ", "[^x]", TI83P_115),
    t(&[0xBB, 0xDF], "ᴛ", "[^T]", TI83P_115),
    t(&[0xBB, 0xE0], "₀", "[_0]", TI83P_115),
    t(&[0xBB, 0xE1], "₁", "[_1]", TI83P_115),
    t(&[0xBB, 0xE2], "₂", "[_2]", TI83P_115),
    t(&[0xBB, 0xE3], "₃", "[_3]", TI83P_115),
    t(&[0xBB, 0xE4], "₄", "[_4]", TI83P_115),
    t(&[0xBB, 0xE5], "₅", "[_5]", TI83P_115),
    t(&[0xBB, 0xE6], "₆", "[_6]", TI83P_115),
    t(&[0xBB, 0xE7], "₇", "[_7]", TI83P_115),
    t(&[0xBB, 0xE8], "₈", "[_8]", TI83P_115),
    t(&[0xBB, 0xE9], "₉", "[_9]", TI83P_115),
    t(&[0xBB, 0xEA], "⏨", "[_10]", TI83P_115),
    t(&[0xBB, 0xEB], "◄", "<|", TI83P_115),
    t(&[0xBB, 0xEC], "►", "|>", TI83P_115),
    t(&[0xBB, 0xED], "↑", "[up]", TI83P_115),
    t(&[0xBB, 0xEE], "↓", "[down]", TI83P_115),
    t(&[0xBB, 0xF0], "×", "[times]", TI83P_115),
    t(&[0xBB, 0xF1], "∫", "[integral]", TI83P_115),
    t(&[0xBB, 0xF2], "🡁", "[bold up]", TI83P_115),
    t(&[0xBB, 0xF3], "🡃", "[bold down]", TI83P_115),
    t(&[0xBB, 0xF4], "√", "[root]", TI83P_115),
    t(&[0xBB, 0xF5], "⌸", "[invertedequal]", TI83P_116),
    // === TI-84+ commands (EF) ===
    s(&[0xEF, 0x00], "setDate(", TI84P_221),
    s(&[0xEF, 0x01], "setTime(", TI84P_221),
    s(&[0xEF, 0x02], "checkTmr(", TI84P_221),
    s(&[0xEF, 0x03], "setDtFmt(", TI84P_221),
    s(&[0xEF, 0x04], "setTmFmt(", TI84P_221),
    s(&[0xEF, 0x05], "timeCnv(", TI84P_221),
    s(&[0xEF, 0x06], "dayOfWk(", TI84P_221),
    s(&[0xEF, 0x07], "getDtStr(", TI84P_221),
    s(&[0xEF, 0x08], "getTmStr(", TI84P_221),
    s(&[0xEF, 0x09], "getDate", TI84P_221),
    s(&[0xEF, 0x0A], "getTime", TI84P_221),
    s(&[0xEF, 0x0B], "startTmr", TI84P_221),
    s(&[0xEF, 0x0C], "getDtFmt", TI84P_221),
    s(&[0xEF, 0x0D], "getTmFmt", TI84P_221),
    s(&[0xEF, 0x0E], "isClockOn", TI84P_221),
    s(&[0xEF, 0x0F], "ClockOff", TI84P_221),
    s(&[0xEF, 0x10], "ClockOn", TI84P_221),
    s(&[0xEF, 0x11], "OpenLib(", TI84P_221),
    s(&[0xEF, 0x12], "ExecLib", TI84P_221),
    s(&[0xEF, 0x13], "invT(", TI84P_230),
    t(&[0xEF, 0x14], "χ²GOF-Test(", "chi^2GOF-Test(", TI84P_230),
    s(&[0xEF, 0x15], "LinRegTInt ", TI84P_230),
    s(&[0xEF, 0x16], "Manual-Fit ", TI84P_230),
    s(&[0xEF, 0x17], "ZQuadrant1", TI84P_253),
    t(&[0xEF, 0x18], "ZFrac1⁄2", "ZFrac1/2", TI84P_253),
    t(&[0xEF, 0x19], "ZFrac1⁄3", "ZFrac1/3", TI84P_253),
    t(&[0xEF, 0x1A], "ZFrac1⁄4", "ZFrac1/4", TI84P_253),
    t(&[0xEF, 0x1B], "ZFrac1⁄5", "ZFrac1/5", TI84P_253),
    t(&[0xEF, 0x1C], "ZFrac1⁄8", "ZFrac1/8", TI84P_253),
    t(&[0xEF, 0x1D], "ZFrac1⁄10", "ZFrac1/10", TI84P_253),
    t(&[0xEF, 0x2E], "⁄", "[n/d]", TI84P_253),
    t(&[0xEF, 0x2F], "ᵤ", "[Un/d]", TI84P_253),
    t(&[0xEF, 0x30], "►n⁄d◄►Un⁄d", ">n/d<>Un/d", TI84P_253),
    t(&[0xEF, 0x31], "►F◄►D", ">F<>D", TI84P_253),
    s(&[0xEF, 0x32], "remainder(", TI84P_253),
    t(&[0xEF, 0x33], "Σ(", "summation(", TI84P_253),
    s(&[0xEF, 0x34], "logBASE(", TI84P_253),
    s(&[0xEF, 0x35], "randIntNoRep(", TI84P_253),
    s(&[0xEF, 0x37], "MATHPRINT", TI84P_253),
    s(&[0xEF, 0x38], "CLASSIC", TI84P_253),
    t(&[0xEF, 0x39], "n⁄d", "n/d", TI84P_253),
    t(&[0xEF, 0x3A], "Un⁄d", "Un/d", TI84P_253),
    s(&[0xEF, 0x3B], "AUTO", TI84P_253),
    s(&[0xEF, 0x3C], "DEC", TI84P_253),
    s(&[0xEF, 0x3D], "FRAC", TI84P_253),
    s(&[0xEF, 0x3E], "FRAC-APPROX", TI84P_253),
    s(&[0xEF, 0x3F], "STATWIZARD ON", TI84P_255),
    s(&[0xEF, 0x40], "STATWIZARD OFF", TI84P_255),
    s(&[0xEF, 0x41], "BLUE", TI84PCSE),
    s(&[0xEF, 0x42], "RED", TI84PCSE),
    s(&[0xEF, 0x43], "BLACK", TI84PCSE),
    s(&[0xEF, 0x44], "MAGENTA", TI84PCSE),
    s(&[0xEF, 0x45], "GREEN", TI84PCSE),
    s(&[0xEF, 0x46], "ORANGE", TI84PCSE),
    s(&[0xEF, 0x47], "BROWN", TI84PCSE),
    s(&[0xEF, 0x48], "NAVY", TI84PCSE),
    s(&[0xEF, 0x49], "LTBLUE", TI84PCSE),
    s(&[0xEF, 0x4A], "YELLOW", TI84PCSE),
    s(&[0xEF, 0x4B], "WHITE", TI84PCSE),
    s(&[0xEF, 0x4C], "LTGRAY", TI84PCSE),
    s(&[0xEF, 0x4D], "MEDGRAY", TI84PCSE),
    s(&[0xEF, 0x4E], "GRAY", TI84PCSE),
    s(&[0xEF, 0x4F], "DARKGRAY", TI84PCSE),
    s(&[0xEF, 0x50], "Image1", TI84PCSE),
    s(&[0xEF, 0x51], "Image2", TI84PCSE),
    s(&[0xEF, 0x52], "Image3", TI84PCSE),
    s(&[0xEF, 0x53], "Image4", TI84PCSE),
    s(&[0xEF, 0x54], "Image5", TI84PCSE),
    s(&[0xEF, 0x55], "Image6", TI84PCSE),
    s(&[0xEF, 0x56], "Image7", TI84PCSE),
    s(&[0xEF, 0x57], "Image8", TI84PCSE),
    s(&[0xEF, 0x58], "Image9", TI84PCSE),
    s(&[0xEF, 0x59], "Image0", TI84PCSE),
    s(&[0xEF, 0x5A], "GridLine ", TI84PCSE),
    s(&[0xEF, 0x5B], "BackgroundOn ", TI84PCSE),
    s(&[0xEF, 0x64], "BackgroundOff", TI84PCSE),
    s(&[0xEF, 0x65], "GraphColor(", TI84PCSE),
    s(&[0xEF, 0x67], "TextColor(", TI84PCSE),
    s(&[0xEF, 0x68], "Asm84CPrgm", TI84PCSE),
    s(&[0xEF, 0x69], "Asm84CCmp", TI84PCSE),
    s(&[0xEF, 0x6A], "DetectAsymOn", TI84PCSE),
    s(&[0xEF, 0x6B], "DetectAsymOff", TI84PCSE),
    s(&[0xEF, 0x6C], "BorderColor ", TI84PCSE),
    s(&[0xEF, 0x73], "tinydotplot", TI84PCE),
    s(&[0xEF, 0x74], "Thin", TI84PCE),
    s(&[0xEF, 0x75], "Dot-Thin", TI84PCE),
    s(&[0xEF, 0x7A], "Asm84CEPrgm", TI84PCE),
    s(&[0xEF, 0x7B], "Asm84CECmp", TI84PCE),
    s(&[0xEF, 0x96], "Wait ", TI84PCE_52),
    s(&[0xEF, 0x97], "toString(", TI84PCE_52),
    s(&[0xEF, 0x98], "eval(", TI84PCE_52),
    s(&[0xEF, 0x9E], "piecewise(", TI84PCE_53),
    // === Renames ===
    s(&[0x7E, 0x06], "Thick", TI84PCE),
    s(&[0x7E, 0x07], "Dot-Thick", TI84PCE),
];

static ALTERNATES: &[Alternate] = &[
    Alternate { bytes: &[0x0C], name: "^-1" },
    Alternate { bytes: &[0x0D], name: "^2" },
    Alternate { bytes: &[0x0F], name: "^3" },
    Alternate { bytes: &[0x5B], name: "Θ" },
    Alternate { bytes: &[0x71], name: "−" },
    Alternate { bytes: &[0x83], name: "÷" },
    Alternate { bytes: &[0xAC], name: "[pi]" },
    Alternate { bytes: &[0xEB], name: "⌊" },
    Alternate { bytes: &[0xBB, 0xD7], name: "\\\\" },
];
