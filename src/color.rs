use palette::Srgb;

/// An opaque 8-bit sRGB color. Alpha never takes part in extraction or sampling.
pub type Rgb = Srgb<u8>;

/// Pack a color into a 24-bit `0xRRGGBB` key.
#[inline(always)]
pub fn pack(color: Rgb) -> u32 {
    ((color.red as u32) << 16) | ((color.green as u32) << 8) | color.blue as u32
}

/// Pack the RGB channels of one RGBA sample, dropping alpha.
#[inline(always)]
pub(crate) fn pack_rgba(sample: &[u8]) -> u32 {
    ((sample[0] as u32) << 16) | ((sample[1] as u32) << 8) | sample[2] as u32
}

#[inline(always)]
pub fn unpack(key: u32) -> Rgb {
    Srgb::new((key >> 16) as u8, (key >> 8) as u8, key as u8)
}

/// `#rrggbb`, lowercase and zero-padded.
pub fn to_hex(color: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

pub fn key_to_hex(key: u32) -> String {
    format!("#{:06x}", key & 0x00ff_ffff)
}
