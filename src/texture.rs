//! Procedural cube textures and their GPU upload.
//!
//! Both images are generated on the CPU so the viewer has no asset files to
//! locate at runtime.

/// Tightly packed RGBA8 image
#[derive(Debug, Clone, PartialEq)]
pub struct TextureImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl TextureImage {
    pub fn from_fn(width: u32, height: u32, f: impl Fn(u32, u32) -> [u8; 4]) -> Self {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.extend_from_slice(&f(x, y));
            }
        }
        Self { width, height, pixels }
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * self.width + x) * 4) as usize;
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2], self.pixels[i + 3]]
    }

    /// Wooden crate: planks with a darker frame around the border
    pub fn crate_planks(size: u32) -> Self {
        let border = (size / 10).max(1);
        let plank = (size / 4).max(1);
        Self::from_fn(size, size, |x, y| {
            let on_border = x < border || y < border || x >= size - border || y >= size - border;
            if on_border {
                [92, 58, 30, 255]
            } else if (y / plank) % 2 == 0 {
                [176, 124, 70, 255]
            } else {
                [156, 106, 58, 255]
            }
        })
    }

    /// Yellow smiley on a transparent background
    pub fn smiley(size: u32) -> Self {
        let s = size as f32;
        Self::from_fn(size, size, |x, y| {
            let u = (x as f32 + 0.5) / s - 0.5;
            let v = (y as f32 + 0.5) / s - 0.5;
            let r = (u * u + v * v).sqrt();

            if r > 0.45 {
                return [0, 0, 0, 0];
            }

            let eye = |cx: f32| ((u - cx).powi(2) + (v + 0.12).powi(2)).sqrt() < 0.06;
            let mouth = r > 0.22 && r < 0.28 && v > 0.05;
            if eye(-0.15) || eye(0.15) || mouth {
                [40, 30, 10, 255]
            } else {
                [250, 210, 40, 255]
            }
        })
    }
}

/// GPU texture plus the view and sampler bound by the cube pipeline
pub struct GpuTexture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
}

impl GpuTexture {
    pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

    /// Repeat wrapping with linear filtering
    pub fn from_image(device: &wgpu::Device, queue: &wgpu::Queue, image: &TextureImage, label: &str) -> Self {
        let size = wgpu::Extent3d {
            width: image.width,
            height: image.height,
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &image.pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * image.width),
                rows_per_image: Some(image.height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        Self { texture, view, sampler }
    }

    pub fn depth(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            compare: Some(wgpu::CompareFunction::LessEqual),
            ..Default::default()
        });

        Self { texture, view, sampler }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fn_fills_row_major() {
        let image = TextureImage::from_fn(3, 2, |x, y| [x as u8, y as u8, 0, 255]);
        assert_eq!(image.pixels.len(), 3 * 2 * 4);
        assert_eq!(image.pixel(2, 1), [2, 1, 0, 255]);
        assert_eq!(image.pixel(0, 1), [0, 1, 0, 255]);
    }

    #[test]
    fn crate_has_dark_border() {
        let image = TextureImage::crate_planks(64);
        assert_eq!(image.pixel(0, 0), [92, 58, 30, 255]);
        assert_eq!(image.pixel(63, 32), [92, 58, 30, 255]);
        assert_ne!(image.pixel(32, 32), [92, 58, 30, 255]);
    }

    #[test]
    fn smiley_corners_are_transparent() {
        let image = TextureImage::smiley(64);
        assert_eq!(image.pixel(0, 0)[3], 0);
        assert_eq!(image.pixel(63, 63)[3], 0);
        assert_eq!(image.pixel(32, 32), [250, 210, 40, 255]);
    }
}
