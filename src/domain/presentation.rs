//! Card artwork choices that do not depend on the UI toolkit. Remote images
//! are never loaded, so every card shows its placeholder gradient.

/// An sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Two-stop gradient shown where a listing has no usable image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Gradient {
    pub from: Rgb,
    pub to: Rgb,
}

const PALETTE: [Gradient; 6] = [
    Gradient { from: Rgb(0x66, 0x7e, 0xea), to: Rgb(0x76, 0x4b, 0xa2) },
    Gradient { from: Rgb(0xf0, 0x93, 0xfb), to: Rgb(0xf5, 0x57, 0x6c) },
    Gradient { from: Rgb(0x4f, 0xac, 0xfe), to: Rgb(0x00, 0xf2, 0xfe) },
    Gradient { from: Rgb(0x43, 0xe9, 0x7b), to: Rgb(0x38, 0xf9, 0xd7) },
    Gradient { from: Rgb(0xfa, 0x70, 0x9a), to: Rgb(0xfe, 0xe1, 0x40) },
    Gradient { from: Rgb(0x30, 0xcf, 0xd0), to: Rgb(0x33, 0x08, 0x67) },
];

/// Same id, same gradient, on every run and every machine.
pub fn placeholder_gradient(id: &str) -> Gradient {
    PALETTE[(fnv1a(id.as_bytes()) % PALETTE.len() as u64) as usize]
}

fn fnv1a(bytes: &[u8]) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    bytes
        .iter()
        .fold(OFFSET, |hash, b| (hash ^ u64::from(*b)).wrapping_mul(PRIME))
}
