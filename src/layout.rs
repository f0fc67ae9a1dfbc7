//! Start/stop supervision of the external layout process.
//!
//! Iterative layouts (force-directed and friends) run inside a
//! collaborator that may own a worker thread; it mutates entity positions
//! asynchronously and this crate only consumes the results. The
//! supervisor's one job is ordering: a running layout must be stopped
//! before anything else writes positions, so there are never two
//! competing position writers.

/// Handle to an external layout process.
pub trait LayoutDriver {
    /// Begin (or resume) iterating.
    fn start(&mut self);

    /// Stop iterating. Must be idempotent.
    fn stop(&mut self);

    /// Whether the process is currently iterating.
    fn is_running(&self) -> bool;
}

/// Wraps one [`LayoutDriver`] and enforces stop-before-static-placement.
#[derive(Debug)]
pub struct LayoutSupervisor<L: LayoutDriver> {
    driver: L,
}

impl<L: LayoutDriver> LayoutSupervisor<L> {
    /// Supervisor over `driver`.
    pub fn new(driver: L) -> Self {
        Self { driver }
    }

    /// Start the layout process.
    pub fn start(&mut self) {
        log::debug!("layout started");
        self.driver.start();
    }

    /// Stop the layout process.
    pub fn stop(&mut self) {
        log::debug!("layout stopped");
        self.driver.stop();
    }

    /// Whether the layout process is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.driver.is_running()
    }

    /// Prepare for a static position assignment: stop the layout first if
    /// it is running, so the caller's subsequent position writes cannot
    /// race the iterating layout.
    ///
    /// Returns whether a running layout had to be stopped.
    pub fn begin_static_placement(&mut self) -> bool {
        if self.driver.is_running() {
            log::debug!("stopping layout before static placement");
            self.driver.stop();
            true
        } else {
            false
        }
    }

    /// The wrapped driver.
    pub fn driver(&self) -> &L {
        &self.driver
    }
}
