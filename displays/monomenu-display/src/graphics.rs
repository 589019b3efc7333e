//! embedded-graphics surface
//!
//! Renders text with a monospace font; `layout()` returns a `Layout` whose
//! character metrics match that font.

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};

use monomenu_core::{Color, DisplaySurface, Layout, SurfaceError};

/// Commit a drawn frame to the physical display
///
/// Buffered panel drivers implement this by sending their frame buffer;
/// unbuffered ones can return `Ok(())`.
pub trait Flush {
    fn flush(&mut self) -> Result<(), SurfaceError>;
}

/// `DisplaySurface` backed by an embedded-graphics draw target
pub struct GraphicsSurface<D> {
    target: D,
    font: &'static MonoFont<'static>,
    /// Number of committed frames
    frames: u32,
}

impl<D> GraphicsSurface<D>
where
    D: DrawTarget<Color = BinaryColor> + OriginDimensions + Flush,
{
    /// Wrap a draw target, rendering text with the 6x10 ASCII font
    pub fn new(target: D) -> Self {
        Self::with_font(target, &FONT_6X10)
    }

    /// Wrap a draw target with a custom monospace font
    pub fn with_font(target: D, font: &'static MonoFont<'static>) -> Self {
        Self {
            target,
            font,
            frames: 0,
        }
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    pub fn into_inner(self) -> D {
        self.target
    }

    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Default layout adjusted to the font cell size
    ///
    /// Rows and the title bar grow if the font does not fit the defaults.
    pub fn layout(&self) -> Layout {
        let defaults = Layout::default();
        let cell = self.font.character_size;
        let char_width = clamp_u16(cell.width + self.font.character_spacing);
        let char_height = clamp_u16(cell.height);
        let title_height = defaults.title_height.max(char_height.saturating_add(4));

        Layout {
            title_height,
            item_height: defaults.item_height.max(char_height.saturating_add(2)),
            top_margin: (title_height - char_height) / 2,
            char_width,
            char_height,
            ..defaults
        }
    }

    fn draw_rectangle(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        style: PrimitiveStyle<BinaryColor>,
    ) -> Result<(), SurfaceError> {
        Rectangle::new(
            Point::new(i32::from(x), i32::from(y)),
            Size::new(u32::from(width), u32::from(height)),
        )
        .into_styled(style)
        .draw(&mut self.target)
        .map_err(|_| SurfaceError::Communication)
    }
}

impl<D> DisplaySurface for GraphicsSurface<D>
where
    D: DrawTarget<Color = BinaryColor> + OriginDimensions + Flush,
{
    fn width(&self) -> u16 {
        clamp_u16(self.target.size().width)
    }

    fn height(&self) -> u16 {
        clamp_u16(self.target.size().height)
    }

    fn fill(&mut self, color: Color) -> Result<(), SurfaceError> {
        self.target
            .clear(to_binary(color))
            .map_err(|_| SurfaceError::Communication)
    }

    fn fill_rect(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        color: Color,
    ) -> Result<(), SurfaceError> {
        self.draw_rectangle(x, y, width, height, PrimitiveStyle::with_fill(to_binary(color)))
    }

    fn rect(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        color: Color,
    ) -> Result<(), SurfaceError> {
        self.draw_rectangle(
            x,
            y,
            width,
            height,
            PrimitiveStyle::with_stroke(to_binary(color), 1),
        )
    }

    fn text(&mut self, text: &str, x: u16, y: u16, color: Color) -> Result<(), SurfaceError> {
        let style = MonoTextStyle::new(self.font, to_binary(color));
        Text::with_baseline(
            text,
            Point::new(i32::from(x), i32::from(y)),
            style,
            Baseline::Top,
        )
        .draw(&mut self.target)
        .map(|_| ())
        .map_err(|_| SurfaceError::Communication)
    }

    fn show(&mut self) -> Result<(), SurfaceError> {
        self.target.flush()?;
        self.frames += 1;
        Ok(())
    }
}

fn to_binary(color: Color) -> BinaryColor {
    BinaryColor::from(color.is_on())
}

fn clamp_u16(value: u32) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use monomenu_core::{DisplayManager, Event, MenuItem, Screen, ScreenGraph, ScreenId};

    /// 128x64 frame buffer that allows overdraw and counts flushes
    struct TestPanel {
        pixels: Vec<BinaryColor>,
        flushes: u32,
    }

    const WIDTH: u32 = 128;
    const HEIGHT: u32 = 64;

    impl TestPanel {
        fn new() -> Self {
            Self {
                pixels: vec![BinaryColor::Off; (WIDTH * HEIGHT) as usize],
                flushes: 0,
            }
        }

        fn pixel(&self, x: u32, y: u32) -> BinaryColor {
            self.pixels[(y * WIDTH + x) as usize]
        }

        fn any_in(&self, xs: core::ops::Range<u32>, ys: core::ops::Range<u32>, color: BinaryColor) -> bool {
            ys.flat_map(|y| xs.clone().map(move |x| (x, y)))
                .any(|(x, y)| self.pixel(x, y) == color)
        }
    }

    impl DrawTarget for TestPanel {
        type Color = BinaryColor;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(coord, color) in pixels {
                if coord.x >= 0
                    && coord.y >= 0
                    && (coord.x as u32) < WIDTH
                    && (coord.y as u32) < HEIGHT
                {
                    let idx = (coord.y as u32 * WIDTH + coord.x as u32) as usize;
                    self.pixels[idx] = color;
                }
            }
            Ok(())
        }
    }

    impl OriginDimensions for TestPanel {
        fn size(&self) -> Size {
            Size::new(WIDTH, HEIGHT)
        }
    }

    impl Flush for TestPanel {
        fn flush(&mut self) -> Result<(), SurfaceError> {
            self.flushes += 1;
            Ok(())
        }
    }

    struct DeadPanel;

    impl DrawTarget for DeadPanel {
        type Color = BinaryColor;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, _pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            Ok(())
        }
    }

    impl OriginDimensions for DeadPanel {
        fn size(&self) -> Size {
            Size::new(WIDTH, HEIGHT)
        }
    }

    impl Flush for DeadPanel {
        fn flush(&mut self) -> Result<(), SurfaceError> {
            Err(SurfaceError::Communication)
        }
    }

    #[test]
    fn test_dimensions_and_layout() {
        let surface = GraphicsSurface::new(TestPanel::new());
        assert_eq!((surface.width(), surface.height()), (128, 64));

        let layout = surface.layout();
        assert_eq!((layout.char_width, layout.char_height), (6, 10));
        assert_eq!(layout.item_height, 12);
        assert_eq!(layout.title_height, 16);
        assert_eq!(layout.items_on_screen(64), 4);
    }

    #[test]
    fn test_primitives_reach_pixels() {
        let mut surface = GraphicsSurface::new(TestPanel::new());
        surface.fill(Color::On).unwrap();
        assert_eq!(surface.target().pixel(127, 63), BinaryColor::On);

        surface.fill(Color::Off).unwrap();
        surface.fill_rect(10, 10, 4, 4, Color::On).unwrap();
        assert_eq!(surface.target().pixel(11, 11), BinaryColor::On);
        assert_eq!(surface.target().pixel(14, 14), BinaryColor::Off);

        surface.rect(20, 20, 6, 6, Color::On).unwrap();
        assert_eq!(surface.target().pixel(20, 20), BinaryColor::On);
        assert_eq!(surface.target().pixel(22, 22), BinaryColor::Off);

        surface.text("M", 40, 0, Color::On).unwrap();
        assert!(surface.target().any_in(40..46, 0..10, BinaryColor::On));

        surface.show().unwrap();
        assert_eq!(surface.frames(), 1);
        assert_eq!(surface.target().flushes, 1);
    }

    #[test]
    fn test_flush_error_propagates() {
        let mut surface = GraphicsSurface::new(DeadPanel);
        assert_eq!(surface.show(), Err(SurfaceError::Communication));
        assert_eq!(surface.frames(), 0);
    }

    #[test]
    fn test_menu_renders_and_moves() {
        let surface = GraphicsSurface::new(TestPanel::new());
        let layout = surface.layout();

        let mut graph = ScreenGraph::new();
        let items = [
            MenuItem::leaf("Start"),
            MenuItem::toggle("Heater", true),
            MenuItem::leaf("About"),
        ];
        let main = graph
            .add(Screen::menu(Some("Main"), &items, 0).unwrap())
            .unwrap();
        let mut dm = DisplayManager::with_layout(surface, graph, main, layout).unwrap();
        dm.redraw().unwrap();

        let panel = dm.surface().target();
        // Title band lit, title text punched out of it
        assert_eq!(panel.pixel(0, 0), BinaryColor::On);
        assert!(panel.any_in(5..29, 3..13, BinaryColor::Off));
        // Active row inverted, next row normal
        assert_eq!(panel.pixel(0, 16), BinaryColor::On);
        assert_eq!(panel.pixel(0, 28), BinaryColor::Off);
        // Enabled toggle: filled box at 128 - 5 - 6
        assert_eq!(panel.pixel(119, 33), BinaryColor::On);
        assert_eq!(panel.flushes, 1);

        dm.handle_event(Event::Down).unwrap();
        let panel = dm.surface().target();
        assert_eq!(panel.pixel(0, 16), BinaryColor::Off);
        assert_eq!(panel.pixel(0, 28), BinaryColor::On);
        // Marker on the now active row is drawn in background color
        assert_eq!(panel.pixel(119, 33), BinaryColor::Off);
        assert_eq!(panel.flushes, 2);

        dm.handle_event(Event::ButtonDown).unwrap();
        let panel = dm.surface().target();
        // Disabled toggle: outline only
        assert_eq!(panel.pixel(117, 31), BinaryColor::Off);
        assert_eq!(panel.pixel(119, 33), BinaryColor::On);
    }

    /// Demo sequence of three submenus on a 128x64 panel, including a
    /// seven-item menu that scrolls
    #[test]
    fn test_scripted_demo_sequence() {
        let surface = GraphicsSurface::new(TestPanel::new());
        let layout = surface.layout();

        let mut graph = ScreenGraph::new();
        let sub1 = graph
            .add(
                Screen::menu(
                    Some("Submenu 1"),
                    &[
                        MenuItem::leaf("Subitem 1.1"),
                        MenuItem::leaf("Subitem 1.2"),
                        MenuItem::back("Back"),
                    ],
                    0,
                )
                .unwrap(),
            )
            .unwrap();
        let sub2 = graph
            .add(
                Screen::menu(
                    Some("Submenu 2"),
                    &[
                        MenuItem::leaf("Subitem 2.1"),
                        MenuItem::leaf("Subitem 2.2"),
                        MenuItem::leaf("Subitem 2.3"),
                        MenuItem::back("Back"),
                    ],
                    0,
                )
                .unwrap(),
            )
            .unwrap();
        let sub3 = graph
            .add(
                Screen::menu(
                    Some("Submenu 3"),
                    &[
                        MenuItem::leaf("Subitem 3.1"),
                        MenuItem::leaf("Subitem 3.2"),
                        MenuItem::leaf("Subitem 3.3"),
                        MenuItem::leaf("Subitem 3.4"),
                        MenuItem::leaf("Subitem 3.5"),
                        MenuItem::leaf("Subitem 3.6"),
                        MenuItem::back("Back"),
                    ],
                    0,
                )
                .unwrap(),
            )
            .unwrap();
        let main = graph
            .add(
                Screen::menu(
                    Some("Main Menu"),
                    &[
                        MenuItem::submenu("Submenu 1", sub1),
                        MenuItem::submenu("Submenu 2", sub2),
                        MenuItem::submenu("Submenu 3", sub3),
                    ],
                    0,
                )
                .unwrap(),
            )
            .unwrap();
        let mut dm = DisplayManager::with_layout(surface, graph, main, layout).unwrap();

        let menu_state = |dm: &DisplayManager<'_, GraphicsSurface<TestPanel>>, id: ScreenId| {
            let menu = dm.screen(id).and_then(|s| s.as_menu()).unwrap();
            (menu.active_index(), menu.top_index())
        };

        dm.handle_event(Event::Redraw).unwrap();
        dm.handle_event(Event::Down).unwrap();
        dm.handle_event(Event::Down).unwrap();
        dm.handle_event(Event::ButtonDown).unwrap();
        assert_eq!(dm.active(), sub3);

        for _ in 0..5 {
            dm.handle_event(Event::Down).unwrap();
        }
        assert_eq!(menu_state(&dm, sub3), (5, 2));

        // Five steps back up plus one ignored at the top
        for _ in 0..6 {
            dm.handle_event(Event::Up).unwrap();
        }
        assert_eq!(menu_state(&dm, sub3), (0, 0));

        // Down to Back plus one ignored at the bottom
        for _ in 0..7 {
            dm.handle_event(Event::Down).unwrap();
        }
        assert_eq!(menu_state(&dm, sub3), (6, 3));

        dm.handle_event(Event::ButtonDown).unwrap();
        dm.handle_event(Event::Redraw).unwrap();
        assert_eq!(dm.active(), main);
        assert_eq!(menu_state(&dm, main), (2, 0));
        // Third row of the main menu is highlighted on the panel
        assert_eq!(dm.surface().target().pixel(0, 40), BinaryColor::On);
    }
}
