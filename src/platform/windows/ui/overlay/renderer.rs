//! Direct2D overlay rendering.
//!
//! The indicator is drawn once per status change into a premultiplied
//! DIB and pushed with UpdateLayeredWindow. Animation frames only move
//! the window and change its constant alpha, so they never redraw.

use windows::core::PCWSTR;
use windows::Win32::Foundation::{COLORREF, E_OUTOFMEMORY, HWND, POINT, RECT, SIZE};
use windows::Win32::Graphics::Direct2D::Common::{
    D2D1_ALPHA_MODE_PREMULTIPLIED, D2D1_COLOR_F, D2D1_PIXEL_FORMAT, D2D_RECT_F,
};
use windows::Win32::Graphics::Direct2D::{
    D2D1CreateFactory, ID2D1DCRenderTarget, ID2D1Factory, ID2D1RenderTarget,
    D2D1_DRAW_TEXT_OPTIONS_NONE, D2D1_FACTORY_TYPE_SINGLE_THREADED,
    D2D1_RENDER_TARGET_PROPERTIES, D2D1_RENDER_TARGET_TYPE_DEFAULT,
    D2D1_RENDER_TARGET_USAGE_NONE, D2D1_ROUNDED_RECT, D2D1_TEXT_ANTIALIAS_MODE_GRAYSCALE,
};
use windows::Win32::Graphics::DirectWrite::{
    DWriteCreateFactory, IDWriteFactory, IDWriteTextFormat, DWRITE_FACTORY_TYPE_SHARED,
    DWRITE_FONT_STRETCH_NORMAL, DWRITE_FONT_STYLE_NORMAL, DWRITE_FONT_WEIGHT_NORMAL,
    DWRITE_MEASURING_MODE_NATURAL, DWRITE_PARAGRAPH_ALIGNMENT_CENTER,
    DWRITE_TEXT_ALIGNMENT_CENTER,
};
use windows::Win32::Graphics::Dxgi::Common::DXGI_FORMAT_B8G8R8A8_UNORM;
use windows::Win32::Graphics::Gdi::{
    CreateCompatibleDC, CreateDIBSection, DeleteDC, DeleteObject, GetDC, ReleaseDC, SelectObject,
    AC_SRC_ALPHA, AC_SRC_OVER, BITMAPINFO, BITMAPINFOHEADER, BI_RGB, BLENDFUNCTION,
    DIB_RGB_COLORS,
};
use windows::Win32::UI::WindowsAndMessaging::{
    SetWindowPos, ShowWindow, UpdateLayeredWindow, HWND_TOPMOST, SWP_NOACTIVATE, SWP_NOMOVE,
    SWP_NOSIZE, SW_HIDE, SW_SHOWNOACTIVATE, ULW_ALPHA,
};

use crate::indicator::{Point, Size};
use crate::model::constants::*;
use crate::model::IndicatorContent;

/// Draws indicator content into the layered overlay window.
pub struct OverlayRenderer {
    factory: ID2D1Factory,
    dwrite: IDWriteFactory,
    /// Text format cached per font size in pixels.
    text_format: Option<(u32, IDWriteTextFormat)>,
}

impl OverlayRenderer {
    pub fn new() -> windows::core::Result<Self> {
        unsafe {
            let factory: ID2D1Factory =
                D2D1CreateFactory(D2D1_FACTORY_TYPE_SINGLE_THREADED, None)?;
            let dwrite: IDWriteFactory = DWriteCreateFactory(DWRITE_FACTORY_TYPE_SHARED)?;
            Ok(Self {
                factory,
                dwrite,
                text_format: None,
            })
        }
    }

    /// Draw `content` at `size` pixels and place the window at `origin`.
    pub fn paint(
        &mut self,
        hwnd: HWND,
        content: &IndicatorContent,
        size: Size,
        scale: f64,
        origin: Point,
        opacity: f64,
    ) -> windows::core::Result<()> {
        let font_px = (INDICATOR_FONT_SIZE * scale).round().max(1.0) as u32;
        let format = self.text_format(font_px)?;

        unsafe {
            let screen_dc = GetDC(None);
            let mem_dc = CreateCompatibleDC(Some(screen_dc));

            let bmi = BITMAPINFO {
                bmiHeader: BITMAPINFOHEADER {
                    biSize: std::mem::size_of::<BITMAPINFOHEADER>() as u32,
                    biWidth: size.width,
                    biHeight: -size.height, // Top-down
                    biPlanes: 1,
                    biBitCount: 32,
                    biCompression: BI_RGB.0,
                    ..Default::default()
                },
                ..Default::default()
            };

            let mut bits: *mut std::ffi::c_void = std::ptr::null_mut();
            let bitmap =
                match CreateDIBSection(Some(mem_dc), &bmi, DIB_RGB_COLORS, &mut bits, None, 0) {
                    Ok(bitmap) if !bits.is_null() => bitmap,
                    Ok(bitmap) => {
                        let _ = DeleteObject(bitmap.into());
                        let _ = DeleteDC(mem_dc);
                        ReleaseDC(None, screen_dc);
                        return Err(E_OUTOFMEMORY.into());
                    }
                    Err(e) => {
                        let _ = DeleteDC(mem_dc);
                        ReleaseDC(None, screen_dc);
                        return Err(e);
                    }
                };
            let old_bitmap = SelectObject(mem_dc, bitmap.into());

            let drawn = self.draw(mem_dc, &format, content, size, scale);

            let result = drawn.and_then(|()| {
                let pt_src = POINT { x: 0, y: 0 };
                let pt_dst = POINT {
                    x: origin.x,
                    y: origin.y,
                };
                let extent = SIZE {
                    cx: size.width,
                    cy: size.height,
                };
                let blend = blend(opacity);
                UpdateLayeredWindow(
                    hwnd,
                    Some(screen_dc),
                    Some(&pt_dst),
                    Some(&extent),
                    Some(mem_dc),
                    Some(&pt_src),
                    COLORREF(0),
                    Some(&blend),
                    ULW_ALPHA,
                )
            });

            SelectObject(mem_dc, old_bitmap);
            let _ = DeleteObject(bitmap.into());
            let _ = DeleteDC(mem_dc);
            ReleaseDC(None, screen_dc);

            result
        }
    }

    /// Move the already painted window and change its opacity.
    pub fn move_and_fade(
        &self,
        hwnd: HWND,
        origin: Point,
        opacity: f64,
    ) -> windows::core::Result<()> {
        let pt_dst = POINT {
            x: origin.x,
            y: origin.y,
        };
        let blend = blend(opacity);
        unsafe {
            UpdateLayeredWindow(
                hwnd,
                None,
                Some(&pt_dst),
                None,
                None,
                None,
                COLORREF(0),
                Some(&blend),
                ULW_ALPHA,
            )
        }
    }

    pub fn show(&self, hwnd: HWND) {
        unsafe {
            let _ = ShowWindow(hwnd, SW_SHOWNOACTIVATE);
            // Stay above the taskbar and other topmost windows
            let _ = SetWindowPos(
                hwnd,
                Some(HWND_TOPMOST),
                0,
                0,
                0,
                0,
                SWP_NOMOVE | SWP_NOSIZE | SWP_NOACTIVATE,
            );
        }
    }

    pub fn hide(&self, hwnd: HWND) {
        unsafe {
            let _ = ShowWindow(hwnd, SW_HIDE);
        }
    }

    fn text_format(&mut self, font_px: u32) -> windows::core::Result<IDWriteTextFormat> {
        if let Some((cached_px, format)) = &self.text_format {
            if *cached_px == font_px {
                return Ok(format.clone());
            }
        }

        let family: Vec<u16> = INDICATOR_FONT_FAMILY
            .encode_utf16()
            .chain(std::iter::once(0))
            .collect();
        let locale: Vec<u16> = "en-us".encode_utf16().chain(std::iter::once(0)).collect();
        let format = unsafe {
            let format = self.dwrite.CreateTextFormat(
                PCWSTR(family.as_ptr()),
                None,
                DWRITE_FONT_WEIGHT_NORMAL,
                DWRITE_FONT_STYLE_NORMAL,
                DWRITE_FONT_STRETCH_NORMAL,
                font_px as f32,
                PCWSTR(locale.as_ptr()),
            )?;
            format.SetTextAlignment(DWRITE_TEXT_ALIGNMENT_CENTER)?;
            format.SetParagraphAlignment(DWRITE_PARAGRAPH_ALIGNMENT_CENTER)?;
            format
        };

        self.text_format = Some((font_px, format.clone()));
        Ok(format)
    }

    unsafe fn draw(
        &self,
        mem_dc: windows::Win32::Graphics::Gdi::HDC,
        format: &IDWriteTextFormat,
        content: &IndicatorContent,
        size: Size,
        scale: f64,
    ) -> windows::core::Result<()> {
        let rt_props = D2D1_RENDER_TARGET_PROPERTIES {
            r#type: D2D1_RENDER_TARGET_TYPE_DEFAULT,
            pixelFormat: D2D1_PIXEL_FORMAT {
                format: DXGI_FORMAT_B8G8R8A8_UNORM,
                alphaMode: D2D1_ALPHA_MODE_PREMULTIPLIED,
            },
            // Sizes are already in physical pixels
            dpiX: 96.0,
            dpiY: 96.0,
            usage: D2D1_RENDER_TARGET_USAGE_NONE,
            minLevel: Default::default(),
        };

        let dc_rt: ID2D1DCRenderTarget = self.factory.CreateDCRenderTarget(&rt_props)?;
        let bounds = RECT {
            left: 0,
            top: 0,
            right: size.width,
            bottom: size.height,
        };
        dc_rt.BindDC(mem_dc, &bounds)?;
        let rt: ID2D1RenderTarget = dc_rt.into();

        let (bg_r, bg_g, bg_b, bg_a) = BACKGROUND_COLOR;
        let background = rt.CreateSolidColorBrush(
            &D2D1_COLOR_F {
                r: bg_r as f32,
                g: bg_g as f32,
                b: bg_b as f32,
                a: bg_a as f32,
            },
            None,
        )?;
        let (r, g, b) = content.color;
        let foreground = rt.CreateSolidColorBrush(
            &D2D1_COLOR_F {
                r: f32::from(r) / 255.0,
                g: f32::from(g) / 255.0,
                b: f32::from(b) / 255.0,
                a: 1.0,
            },
            None,
        )?;

        let full = D2D_RECT_F {
            left: 0.0,
            top: 0.0,
            right: size.width as f32,
            bottom: size.height as f32,
        };
        let radius = (INDICATOR_CORNER_RADIUS * scale) as f32;
        let text: Vec<u16> = content.text.encode_utf16().collect();

        rt.BeginDraw();
        rt.Clear(Some(&D2D1_COLOR_F {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 0.0,
        }));
        // ClearType fringes show on a transparent surface
        rt.SetTextAntialiasMode(D2D1_TEXT_ANTIALIAS_MODE_GRAYSCALE);
        rt.FillRoundedRectangle(
            &D2D1_ROUNDED_RECT {
                rect: full,
                radiusX: radius,
                radiusY: radius,
            },
            &background,
        );
        rt.DrawText(
            &text,
            format,
            &full,
            &foreground,
            D2D1_DRAW_TEXT_OPTIONS_NONE,
            DWRITE_MEASURING_MODE_NATURAL,
        );
        rt.EndDraw(None, None)
    }
}

fn blend(opacity: f64) -> BLENDFUNCTION {
    BLENDFUNCTION {
        BlendOp: AC_SRC_OVER as u8,
        BlendFlags: 0,
        SourceConstantAlpha: (opacity.clamp(0.0, 1.0) * 255.0).round() as u8,
        AlphaFormat: AC_SRC_ALPHA as u8,
    }
}
