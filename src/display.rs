//! Window collaborator: owns the raylib handle and the streaming texture the
//! framebuffer is uploaded into each frame.

use anyhow::{Result, anyhow};
use log::info;
use raylib::prelude::*;

use crate::config::Config;
use crate::screen::ScreenSpace;

/// Returned by [`Display::poll_events`] to drive the frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameControl {
    Continue,
    Quit,
}

// Field order matters: the texture must be unloaded before the handle
// closes the window.
pub struct Display {
    texture: Texture2D,
    handle: RaylibHandle,
    thread: RaylibThread,
    width: u32,
    height: u32,
}

impl Display {
    /// Opens the window and paces frames at `config.target_fps`.
    pub fn create(config: &Config) -> Result<Self> {
        let (mut handle, thread) = raylib::init()
            .size(config.width as i32, config.height as i32)
            .title("Rusterizer")
            .resizable()
            .build();
        handle.set_target_fps(config.target_fps);

        let image = Image::gen_image_color(config.width as i32, config.height as i32, Color::BLACK);
        let texture = handle
            .load_texture_from_image(&thread, &image)
            .map_err(|e| anyhow!("raylib texture loading failed: {e:?}"))?;
        info!("window open at {}x{}, {} fps", config.width, config.height, config.target_fps);

        Ok(Display { texture, handle, thread, width: config.width, height: config.height })
    }

    pub fn poll_events(&mut self) -> FrameControl {
        if self.handle.window_should_close() || self.handle.is_key_pressed(KeyboardKey::KEY_ESCAPE) {
            FrameControl::Quit
        } else {
            FrameControl::Continue
        }
    }

    /// Uploads `screen` and draws it stretched over the window. Blocks until
    /// the next frame slot.
    pub fn present(&mut self, screen: &ScreenSpace) -> Result<()> {
        self.texture
            .update_texture(screen.as_bytes())
            .map_err(|e| anyhow!("texture upload failed: {e:?}"))?;

        let window_width = self.handle.get_screen_width();
        let window_height = self.handle.get_screen_height();
        let mut d = self.handle.begin_drawing(&self.thread);
        d.clear_background(Color::BLACK);
        d.draw_texture_pro(
            &self.texture,
            Rectangle { x: 0.0, y: 0.0, width: self.width as f32, height: self.height as f32 },
            Rectangle { x: 0.0, y: 0.0, width: window_width as f32, height: window_height as f32 },
            Vector2 { x: 0.0, y: 0.0 },
            0.0,
            Color::WHITE,
        );
        d.draw_fps(10, 10);
        Ok(())
    }
}
