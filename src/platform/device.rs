#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Renderer {
    Desktop,
    Web,
    Mobile,
}

impl Renderer {
    pub fn current() -> Self {
        if cfg!(feature = "mobile") {
            Renderer::Mobile
        } else if cfg!(feature = "web") && !cfg!(feature = "desktop") {
            Renderer::Web
        } else {
            Renderer::Desktop
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Renderer::Desktop => "desktop",
            Renderer::Web => "web",
            Renderer::Mobile => "mobile",
        }
    }
}

/// Capabilities of the host, fixed for the lifetime of the process and
/// shared with the component tree as the `device` context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    pub os: &'static str,
    pub arch: &'static str,
    pub renderer: Renderer,
    pub touch: bool,
}

impl DeviceInfo {
    pub fn detect() -> Self {
        Self::for_renderer(Renderer::current())
    }

    pub fn for_renderer(renderer: Renderer) -> Self {
        Self {
            os: std::env::consts::OS,
            arch: std::env::consts::ARCH,
            renderer,
            touch: renderer == Renderer::Mobile,
        }
    }

    pub fn label(&self) -> String {
        let input = if self.touch { "touch" } else { "pointer" };
        format!(
            "{} · {} · {} · {input}",
            self.os,
            self.arch,
            self.renderer.as_str()
        )
    }
}
