//! The build context handed to the bundler.
//!
//! The pre-bundle step resolves everything the bundler needs up front and
//! publishes it as one [`BuildContext`] value. Downstream steps receive it
//! explicitly instead of reading process-wide globals.

use camino::{Utf8Path, Utf8PathBuf};
use chipper_common::{CacheBuster, Checked, Locale, LocaleSet, normalise_locale};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::locales::{LocaleOptions, resolve_locales};
use crate::package::PackageInfo;

/// A deferred image build request.
///
/// String and image plugins cannot run asynchronously while the bundler
/// builds, so mipmaps are collected during the build and generated later.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MipmapTask {
    /// Identifier the bundler uses for the image.
    pub name: String,
    /// Source image path.
    pub path: Utf8PathBuf,
    /// Number of mipmap levels to produce.
    pub level: u8,
}

/// Options forwarded to the bundler's build configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildOptions {
    /// Locale the string plugin looks strings up in.
    pub phet_locale: Locale,
}

/// Everything the bundler reads from the pre-bundle step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildContext {
    locales_to_build: LocaleSet,
    mipmaps_to_build: Vec<MipmapTask>,
    build_options: BuildOptions,
    package: PackageInfo,
    cache_buster: CacheBuster,
}

impl BuildContext {
    /// Locales to bundle, in order.
    #[must_use]
    pub fn locales_to_build(&self) -> &[Locale] {
        &self.locales_to_build
    }

    /// Mipmaps queued so far.
    #[must_use]
    pub fn mipmaps_to_build(&self) -> &[MipmapTask] {
        &self.mipmaps_to_build
    }

    /// Bundler build options.
    #[must_use]
    pub const fn build_options(&self) -> &BuildOptions {
        &self.build_options
    }

    /// Metadata of the simulation being built.
    #[must_use]
    pub const fn package(&self) -> &PackageInfo {
        &self.package
    }

    /// The installed cache-buster generator.
    #[must_use]
    pub const fn cache_buster(&self) -> CacheBuster {
        self.cache_buster
    }

    /// Queue a mipmap for generation after the bundler finishes.
    pub fn queue_mipmap(&mut self, task: MipmapTask) {
        debug!(target: "context", "queued mipmap {}", task.name);
        self.mipmaps_to_build.push(task);
    }
}

/// Assembles a [`BuildContext`].
#[derive(Clone, Debug)]
pub struct BuildContextBuilder {
    package: PackageInfo,
    fallback_locale: Locale,
    locales: Option<LocaleSet>,
    phet_locale: Option<Locale>,
    cache_buster: Option<CacheBuster>,
}

impl BuildContextBuilder {
    /// Start a context for `package` with the given fallback locale.
    #[must_use]
    pub const fn new(package: PackageInfo, fallback_locale: Locale) -> Self {
        Self {
            package,
            fallback_locale,
            locales: None,
            phet_locale: None,
            cache_buster: None,
        }
    }

    /// Set the locales to bundle. Defaults to the fallback locale alone.
    #[must_use]
    pub fn locales(mut self, locales: LocaleSet) -> Self {
        self.locales = Some(locales);
        self
    }

    /// Set the target locale. Defaults to the fallback locale.
    #[must_use]
    pub fn phet_locale(mut self, locale: Locale) -> Self {
        self.phet_locale = Some(locale);
        self
    }

    /// Install a cache-buster generator, replacing any installed earlier.
    #[must_use]
    pub fn cache_buster(mut self, cache_buster: CacheBuster) -> Self {
        self.cache_buster = Some(cache_buster);
        self
    }

    /// Install [`CacheBuster::Disabled`] unless a generator is already
    /// installed.
    ///
    /// ```
    /// use chipper_build::context::BuildContextBuilder;
    /// use chipper_build::package::PackageInfo;
    /// use chipper_common::{CacheBuster, Locale};
    ///
    /// let package = PackageInfo { name: "molarity".into(), version: "1.0.0".into() };
    /// let context = BuildContextBuilder::new(package, Locale::from("en"))
    ///     .cache_buster(CacheBuster::Timestamp)
    ///     .install_default_cache_buster()
    ///     .build();
    /// assert_eq!(context.cache_buster(), CacheBuster::Timestamp);
    /// ```
    #[must_use]
    pub fn install_default_cache_buster(mut self) -> Self {
        self.cache_buster.get_or_insert(CacheBuster::Disabled);
        self
    }

    /// Finish the context with an empty mipmap queue.
    ///
    /// The default cache buster is installed if none was chosen.
    #[must_use]
    pub fn build(self) -> BuildContext {
        let builder = self.install_default_cache_buster();
        let fallback = builder.fallback_locale;

        BuildContext {
            locales_to_build: builder.locales.unwrap_or_else(|| vec![fallback.clone()]),
            mipmaps_to_build: Vec::new(),
            build_options: BuildOptions {
                phet_locale: builder.phet_locale.unwrap_or(fallback),
            },
            package: builder.package,
            cache_buster: builder.cache_buster.unwrap_or(CacheBuster::Disabled),
        }
    }
}

/// Inputs to [`prepare_build`].
#[derive(Clone, Debug)]
pub struct PrepareRequest {
    /// Simulation repository containing `package.json`.
    pub repo_dir: Utf8PathBuf,
    /// Locale always bundled.
    pub fallback_locale: Locale,
    /// `--locales` / `--locales-repo`.
    pub locale_options: LocaleOptions,
    /// `--locale`: the locale strings are looked up in.
    pub target_locale: Option<String>,
    /// Root of the strings checkout; relative paths resolve against
    /// [`Self::repo_dir`].
    pub strings_root: Utf8PathBuf,
    /// Cache buster configured for the build, if any.
    pub cache_buster: Option<CacheBuster>,
}

impl PrepareRequest {
    /// Absolute or repository-relative strings root.
    #[must_use]
    pub fn resolved_strings_root(&self) -> Utf8PathBuf {
        resolve_against(&self.repo_dir, &self.strings_root)
    }
}

fn resolve_against(base: &Utf8Path, path: &Utf8Path) -> Utf8PathBuf {
    if path.is_absolute() {
        path.to_owned()
    } else {
        base.join(path)
    }
}

/// Run the pre-bundle step.
///
/// Reads the package metadata, installs the default cache buster, picks the
/// target locale, and resolves the locales to bundle. Soft failures from
/// locale resolution are carried in the returned [`Checked`].
///
/// # Errors
///
/// Returns an error when `package.json` cannot be read or parsed.
pub fn prepare_build(request: &PrepareRequest) -> Result<Checked<BuildContext>> {
    let package = PackageInfo::read(&request.repo_dir)?;
    debug!(
        target: "context",
        "Building simulation: {} {}",
        package.name,
        package.version
    );

    let phet_locale = normalise_locale(request.target_locale.as_deref())
        .map_or_else(|| request.fallback_locale.clone(), Locale::from);

    let locales = resolve_locales(
        &package.name,
        &request.fallback_locale,
        &request.locale_options,
        &request.resolved_strings_root(),
    );

    let mut builder = BuildContextBuilder::new(package, request.fallback_locale.clone())
        .phet_locale(phet_locale);
    if let Some(cache_buster) = request.cache_buster {
        builder = builder.cache_buster(cache_buster);
    }
    let builder = builder.install_default_cache_buster();

    Ok(locales.map(|locales| builder.locales(locales).build()))
}
