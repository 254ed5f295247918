use winit::dpi::PhysicalSize;

/// Picks the first format whose sRGB-ness matches `prefer_srgb`, or the first
/// supported format when none does.
pub(crate) fn choose_surface_format(
    formats: &[wgpu::TextureFormat],
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    formats
        .iter()
        .copied()
        .find(|f| f.is_srgb() == prefer_srgb)
        .or_else(|| formats.first().copied())
}

/// Opaque when supported; the fractal covers every pixel.
pub(crate) fn choose_alpha_mode(supported: &[wgpu::CompositeAlphaMode]) -> wgpu::CompositeAlphaMode {
    if supported.contains(&wgpu::CompositeAlphaMode::Opaque) {
        wgpu::CompositeAlphaMode::Opaque
    } else {
        supported.first().copied().unwrap_or(wgpu::CompositeAlphaMode::Auto)
    }
}

/// FIFO with vsync (always supported). Without it, Mailbox, then Immediate,
/// then FIFO.
pub(crate) fn choose_present_mode(supported: &[wgpu::PresentMode], vsync: bool) -> wgpu::PresentMode {
    if vsync {
        return wgpu::PresentMode::Fifo;
    }
    [wgpu::PresentMode::Mailbox, wgpu::PresentMode::Immediate]
        .into_iter()
        .find(|m| supported.contains(m))
        .unwrap_or(wgpu::PresentMode::Fifo)
}

/// Records `new_size` and reconfigures unless it is zero-area.
///
/// Returns true when the surface was reconfigured.
pub(crate) fn apply_resize(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &mut wgpu::SurfaceConfiguration,
    size: &mut PhysicalSize<u32>,
    new_size: PhysicalSize<u32>,
) -> bool {
    *size = new_size;
    if !is_drawable(new_size) {
        return false;
    }

    config.width = new_size.width;
    config.height = new_size.height;
    surface.configure(device, config);
    true
}

pub(crate) fn is_drawable(size: PhysicalSize<u32>) -> bool {
    size.width > 0 && size.height > 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::TextureFormat as F;

    #[test]
    fn linear_preferred_skips_srgb() {
        let formats = [F::Bgra8UnormSrgb, F::Bgra8Unorm, F::Rgba8Unorm];
        assert_eq!(choose_surface_format(&formats, false), Some(F::Bgra8Unorm));
    }

    #[test]
    fn srgb_preferred() {
        let formats = [F::Bgra8Unorm, F::Rgba8UnormSrgb];
        assert_eq!(choose_surface_format(&formats, true), Some(F::Rgba8UnormSrgb));
    }

    #[test]
    fn falls_back_to_first() {
        assert_eq!(choose_surface_format(&[F::Bgra8UnormSrgb], false), Some(F::Bgra8UnormSrgb));
        assert_eq!(choose_surface_format(&[], true), None);
    }

    #[test]
    fn alpha_mode_prefers_opaque() {
        use wgpu::CompositeAlphaMode as A;
        assert_eq!(choose_alpha_mode(&[A::PreMultiplied, A::Opaque]), A::Opaque);
        assert_eq!(choose_alpha_mode(&[A::PreMultiplied]), A::PreMultiplied);
        assert_eq!(choose_alpha_mode(&[]), A::Auto);
    }

    #[test]
    fn present_mode_selection() {
        use wgpu::PresentMode as P;
        let all = [P::Fifo, P::Immediate, P::Mailbox];
        assert_eq!(choose_present_mode(&all, true), P::Fifo);
        assert_eq!(choose_present_mode(&all, false), P::Mailbox);
        assert_eq!(choose_present_mode(&[P::Fifo, P::Immediate], false), P::Immediate);
        assert_eq!(choose_present_mode(&[P::Fifo], false), P::Fifo);
    }

    #[test]
    fn zero_area_is_not_drawable() {
        assert!(is_drawable(PhysicalSize::new(1, 1)));
        assert!(!is_drawable(PhysicalSize::new(0, 600)));
        assert!(!is_drawable(PhysicalSize::new(800, 0)));
    }
}
