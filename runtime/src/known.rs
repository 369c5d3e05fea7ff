//! Documented simulation query parameters.
//!
//! Parsing accepts any name; this catalogue only exists so tooling can
//! describe the recognised ones and point out typos.

use std::fmt;

/// A query parameter with documented meaning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KnownParameter {
    /// `dev`
    Dev,
    /// `ea`
    EnableAssertions,
    /// `eall`
    EnableAllAssertions,
    /// `fuzzMouse`
    FuzzMouse,
    /// `profiler`
    Profiler,
    /// `showPointerAreas`
    ShowPointerAreas,
    /// `webgl`
    Webgl,
    /// `accessibility`
    Accessibility,
    /// `joistRenderer`
    JoistRenderer,
    /// `locale`
    Locale,
    /// `playbackInputEventLog`
    PlaybackInputEventLog,
    /// `recordInputEventLog`
    RecordInputEventLog,
    /// `sceneryLog`
    SceneryLog,
    /// `sceneryStringLog`
    SceneryStringLog,
    /// `screens`
    Screens,
    /// `showHomeScreen`
    ShowHomeScreen,
    /// `strings`
    Strings,
    /// `webglContextLossTimeout`
    WebglContextLossTimeout,
    /// `webglContextLossIncremental`
    WebglContextLossIncremental,
    /// `cacheBuster`
    CacheBuster,
    /// `postMessageOnError`
    PostMessageOnError,
}

impl KnownParameter {
    /// Every documented parameter.
    pub const ALL: [Self; 21] = [
        Self::Dev,
        Self::EnableAssertions,
        Self::EnableAllAssertions,
        Self::FuzzMouse,
        Self::Profiler,
        Self::ShowPointerAreas,
        Self::Webgl,
        Self::Accessibility,
        Self::JoistRenderer,
        Self::Locale,
        Self::PlaybackInputEventLog,
        Self::RecordInputEventLog,
        Self::SceneryLog,
        Self::SceneryStringLog,
        Self::Screens,
        Self::ShowHomeScreen,
        Self::Strings,
        Self::WebglContextLossTimeout,
        Self::WebglContextLossIncremental,
        Self::CacheBuster,
        Self::PostMessageOnError,
    ];

    /// Name as it appears in the URL.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::EnableAssertions => "ea",
            Self::EnableAllAssertions => "eall",
            Self::FuzzMouse => "fuzzMouse",
            Self::Profiler => "profiler",
            Self::ShowPointerAreas => "showPointerAreas",
            Self::Webgl => "webgl",
            Self::Accessibility => "accessibility",
            Self::JoistRenderer => "joistRenderer",
            Self::Locale => "locale",
            Self::PlaybackInputEventLog => "playbackInputEventLog",
            Self::RecordInputEventLog => "recordInputEventLog",
            Self::SceneryLog => "sceneryLog",
            Self::SceneryStringLog => "sceneryStringLog",
            Self::Screens => "screens",
            Self::ShowHomeScreen => "showHomeScreen",
            Self::Strings => "strings",
            Self::WebglContextLossTimeout => "webglContextLossTimeout",
            Self::WebglContextLossIncremental => "webglContextLossIncremental",
            Self::CacheBuster => "cacheBuster",
            Self::PostMessageOnError => "postMessageOnError",
        }
    }

    /// One-line description of the parameter's effect.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Dev => "enables developer-only features such as layout bounds",
            Self::EnableAssertions => "enables basic assertions",
            Self::EnableAllAssertions => "enables basic and slow assertions",
            Self::FuzzMouse => "randomly sends mouse events to the simulation",
            Self::Profiler => "shows frame timing statistics",
            Self::ShowPointerAreas => "draws touch and mouse hit areas",
            Self::Webgl => "set to `false` to disable WebGL rendering",
            Self::Accessibility => "enables accessibility features",
            Self::JoistRenderer => "overrides the renderer used for the navigation bar",
            Self::Locale => "selects the locale strings are shown in",
            Self::PlaybackInputEventLog => "replays a recorded input event log",
            Self::RecordInputEventLog => "records input events for later playback",
            Self::SceneryLog => "enables scenery logging for the listed categories",
            Self::SceneryStringLog => "writes scenery log output as text",
            Self::Screens => "comma-separated 1-based screens to include",
            Self::ShowHomeScreen => "set to `false` to skip the home screen",
            Self::Strings => "overrides string values with a JSON object",
            Self::WebglContextLossTimeout => {
                "simulates a WebGL context loss, optionally after a delay in milliseconds"
            }
            Self::WebglContextLossIncremental => {
                "simulates context loss between successively later GL calls"
            }
            Self::CacheBuster => "set to `false` to omit `bust=<time>` from asset URLs",
            Self::PostMessageOnError => "posts uncaught errors to the parent frame",
        }
    }

    /// Look a parameter up by its URL name.
    ///
    /// ```
    /// use chipper_runtime::KnownParameter;
    ///
    /// assert_eq!(KnownParameter::from_name("eall"), Some(KnownParameter::EnableAllAssertions));
    /// assert_eq!(KnownParameter::from_name("EA"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|known| known.name() == name)
    }
}

impl fmt::Display for KnownParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
