//! The editing session.

use crate::{ChangeDetector, SessionResult};
use shape_history::{History, ObjectState, Snapshot, DEFAULT_DEPTH};
use shape_match::GoalComparator;
use shape_transform::{apply_transform, Pose, TransformError, TransformMode};
use shape_types::{Point3, TriMesh, Vector3};
use tracing::{debug, info};

/// Smallest collider height a committed shape may have. A perfectly flat
/// shape still needs a selectable collider.
pub const MIN_COLLIDER_HEIGHT: f32 = 0.01;

/// Construction-time knobs for a [`Session`].
#[derive(Debug, Clone, Copy)]
pub struct SessionParams {
    /// World-space side length of the reference grid.
    pub grid_size: f32,
    /// Per-axis matcher tolerance.
    pub tolerance: f32,
    /// Maximum undo depth.
    pub history_depth: usize,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            grid_size: 8.0,
            tolerance: 0.5,
            history_depth: DEFAULT_DEPTH,
        }
    }
}

impl SessionParams {
    /// Set the reference grid size.
    #[must_use]
    pub const fn with_grid_size(mut self, grid_size: f32) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Set the matcher tolerance.
    #[must_use]
    pub const fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the undo depth.
    #[must_use]
    pub const fn with_history_depth(mut self, history_depth: usize) -> Self {
        self.history_depth = history_depth;
        self
    }
}

/// One editable shape and everything attached to it.
///
/// The session distinguishes the committed *source* mesh from the
/// *derived* preview the current mode produces from it. Only
/// [`Session::commit`] promotes the preview to source; mode changes and
/// pose changes merely regenerate the preview on the next tick.
pub struct Session {
    params: SessionParams,
    source: TriMesh,
    source_pose: Pose,
    grid_pose: Pose,
    collider_size: Vector3<f32>,
    mode: TransformMode,
    derived: TriMesh,
    goal: Vec<Point3<f32>>,
    comparator: GoalComparator,
    history: History,
    detector: ChangeDetector,
    dirty: bool,
}

impl Session {
    /// Build a session around a base mesh and the goal it is matched
    /// against. Both meshes are validated; the grid size must be a
    /// positive finite number.
    pub fn new(params: SessionParams, base: TriMesh, goal: &TriMesh) -> SessionResult<Self> {
        if !(params.grid_size > 0.0 && params.grid_size.is_finite()) {
            return Err(TransformError::InvalidGridSize {
                grid_size: params.grid_size,
            }
            .into());
        }
        base.validate()?;
        goal.validate()?;

        let bounds = base.bounds();
        let mut collider_size = bounds.size();
        collider_size.y = collider_size.y.max(MIN_COLLIDER_HEIGHT);

        let mut session = Self {
            derived: base.clone(),
            source: base,
            source_pose: Pose::identity(),
            grid_pose: Pose::identity(),
            collider_size,
            mode: TransformMode::None,
            goal: goal.positions.clone(),
            comparator: GoalComparator::new(params.tolerance),
            history: History::with_capacity(params.history_depth),
            detector: ChangeDetector::new(),
            dirty: true,
            params,
        };
        // The base shape might already be the goal.
        session
            .comparator
            .request(&session.source.positions, &session.goal);
        Ok(session)
    }

    /// Per-frame step: regenerate the preview if anything it depends on
    /// changed, then surface a finished goal comparison, if any.
    pub fn tick(&mut self) -> SessionResult<Option<bool>> {
        self.refresh()?;
        let verdict = self.comparator.poll();
        if let Some(solved) = verdict {
            info!(solved, "goal comparison finished");
        }
        Ok(verdict)
    }

    /// Select the transform mode applied to the preview.
    pub fn set_mode(&mut self, mode: TransformMode) {
        if mode != self.mode {
            info!(from = self.mode.name(), to = mode.name(), "transform mode changed");
            self.mode = mode;
            self.dirty = true;
        }
    }

    /// Move the shape.
    pub fn set_source_pose(&mut self, pose: Pose) {
        self.source_pose = pose;
    }

    /// Move the reference grid.
    pub fn set_grid_pose(&mut self, pose: Pose) {
        if pose != self.grid_pose {
            self.grid_pose = pose;
            self.dirty = true;
        }
    }

    /// Promote the preview to the committed source mesh.
    ///
    /// The pre-commit source goes to history first, so an undo lands on
    /// the state as it stood when commit was called. The promoted mesh is
    /// re-based on its own bounds center (height kept), the pose absorbs
    /// that offset with rotation reset to identity, and the collider is
    /// resized to the new bounds with the height clamp applied. A goal
    /// comparison is scheduled on the committed vertices.
    pub fn commit(&mut self) -> SessionResult<()> {
        self.refresh()?;
        self.history.push(&self.source, self.object_state());

        let bounds = self.derived.bounds();
        let anchor = if bounds.is_empty() {
            Vector3::zeros()
        } else {
            let center = bounds.center();
            Vector3::new(center.x, 0.0, center.z)
        };

        let mut promoted = self.derived.clone();
        for position in &mut promoted.positions {
            *position -= anchor;
        }
        promoted.recalculate_normals();

        self.source = promoted;
        self.source_pose = Pose::from_position(self.source_pose.position + anchor);
        if !bounds.is_empty() {
            let mut collider_size = bounds.size();
            collider_size.y = collider_size.y.max(MIN_COLLIDER_HEIGHT);
            self.collider_size = collider_size;
        }
        self.dirty = true;

        info!(
            mode = self.mode.name(),
            vertices = self.source.vertex_count(),
            "committed transform"
        );
        self.comparator.request(&self.source.positions, &self.goal);
        Ok(())
    }

    /// Step back one commit. Returns whether anything was restored.
    pub fn undo(&mut self) -> bool {
        let live = Snapshot::new(&self.source, self.object_state());
        match self.history.undo(live) {
            Ok(snapshot) => {
                self.apply_snapshot(snapshot);
                true
            }
            Err(error) => {
                debug!(%error, "undo ignored");
                false
            }
        }
    }

    /// Step forward one undone commit. Returns whether anything was
    /// restored.
    pub fn redo(&mut self) -> bool {
        let live = Snapshot::new(&self.source, self.object_state());
        match self.history.redo(live) {
            Ok(snapshot) => {
                self.apply_snapshot(snapshot);
                true
            }
            Err(error) => {
                debug!(%error, "redo ignored");
                false
            }
        }
    }

    /// Jump back to the oldest remembered state. Returns whether anything
    /// was restored.
    pub fn reset(&mut self) -> bool {
        match self.history.reset() {
            Ok(snapshot) => {
                self.apply_snapshot(snapshot);
                true
            }
            Err(error) => {
                debug!(%error, "reset ignored");
                false
            }
        }
    }

    /// Whether the latest finished comparison declared the goal matched.
    #[must_use]
    pub fn solved(&self) -> bool {
        self.comparator.last_result() == Some(true)
    }

    /// The committed source mesh.
    #[must_use]
    pub fn source(&self) -> &TriMesh {
        &self.source
    }

    /// The current preview mesh.
    #[must_use]
    pub fn derived(&self) -> &TriMesh {
        &self.derived
    }

    /// The selected transform mode.
    #[must_use]
    pub const fn mode(&self) -> TransformMode {
        self.mode
    }

    /// The shape's pose.
    #[must_use]
    pub const fn source_pose(&self) -> Pose {
        self.source_pose
    }

    /// The collider extents of the committed shape.
    #[must_use]
    pub const fn collider_size(&self) -> Vector3<f32> {
        self.collider_size
    }

    /// Whether an undo would restore something.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether a redo would restore something.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn object_state(&self) -> ObjectState {
        ObjectState {
            local_position: self.source_pose.position,
            rotation: self.source_pose.rotation,
            collider_size: self.collider_size,
            mode: self.mode,
            mesh_ref: None,
        }
    }

    fn apply_snapshot(&mut self, snapshot: Snapshot) {
        self.source = snapshot.mesh;
        self.source_pose = Pose::new(
            snapshot.state.local_position,
            snapshot.state.rotation,
        );
        self.collider_size = snapshot.state.collider_size;
        self.mode = snapshot.state.mode;
        self.dirty = true;
        self.comparator.request(&self.source.positions, &self.goal);
    }

    /// Regenerate the preview when the source, the poses or the mode
    /// changed since the last refresh.
    fn refresh(&mut self) -> SessionResult<()> {
        let source_dirty = self.detector.vertices_changed(&self.source.positions);
        let source_pose_dirty = self.detector.pose_changed(&self.source_pose);
        if !(self.dirty || source_dirty || source_pose_dirty) {
            return Ok(());
        }

        self.derived = apply_transform(
            self.mode,
            &self.source,
            &self.source_pose,
            &self.grid_pose,
            self.params.grid_size,
        )?;
        self.dirty = false;
        if self.detector.bounds_changed(&self.derived.bounds().size()) {
            debug!(mode = self.mode.name(), "preview bounds changed");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use shape_grid::{generate_grid, grid_extent, GridParams};
    use std::thread;
    use std::time::Duration;

    fn small_grid() -> (TriMesh, f32) {
        let params = GridParams::default()
            .with_divisions(2)
            .with_subdivisions(2);
        (generate_grid(&params).unwrap(), grid_extent(&params))
    }

    fn session_over(goal: &TriMesh) -> Session {
        let (base, extent) = small_grid();
        let params = SessionParams::default()
            .with_grid_size(extent)
            .with_tolerance(0.5);
        Session::new(params, base, goal).unwrap()
    }

    /// Tick until the comparator has nothing left in flight.
    fn settle(session: &mut Session) {
        for _ in 0..10_000 {
            session.tick().unwrap();
            if !session_comparing(session) {
                return;
            }
            thread::sleep(Duration::from_millis(1));
        }
        panic!("comparator never settled");
    }

    fn session_comparing(session: &Session) -> bool {
        session.comparator.is_comparing()
    }

    #[test]
    fn base_matching_goal_is_solved_without_any_edit() {
        let (goal, _) = small_grid();
        let mut session = session_over(&goal);
        settle(&mut session);
        assert!(session.solved());
    }

    #[test]
    fn mode_change_regenerates_the_preview() {
        let (goal, _) = small_grid();
        let mut session = session_over(&goal);
        session.tick().unwrap();
        let flat = session.derived().positions.clone();

        session.set_mode(TransformMode::Stretch);
        session.tick().unwrap();
        assert_eq!(session.derived().vertex_count(), flat.len());
        assert_ne!(session.derived().positions, flat);
        // Source is untouched until commit.
        assert_eq!(session.source().positions, small_grid().0.positions);
    }

    #[test]
    fn committing_the_right_transform_solves_the_level() {
        let (base, extent) = small_grid();
        let derived = apply_transform(
            TransformMode::Shear,
            &base,
            &Pose::identity(),
            &Pose::identity(),
            extent,
        )
        .unwrap();
        let center = derived.bounds().center();
        let anchor = Vector3::new(center.x, 0.0, center.z);
        let mut goal = derived;
        for position in &mut goal.positions {
            *position -= anchor;
        }

        let mut session = session_over(&goal);
        settle(&mut session);
        session.set_mode(TransformMode::Shear);
        session.commit().unwrap();
        settle(&mut session);
        assert!(session.solved());
    }

    #[test]
    fn commit_rebases_the_mesh_and_absorbs_the_offset_into_the_pose() {
        let (goal, _) = small_grid();
        let mut session = session_over(&goal);
        session.set_mode(TransformMode::Shear);
        session.commit().unwrap();

        let bounds = session.source().bounds();
        let center = bounds.center();
        assert_relative_eq!(center.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(center.z, 0.0, epsilon = 1e-5);
        assert_eq!(session.source_pose().rotation, shape_types::UnitQuaternion::identity());
    }

    #[test]
    fn flat_commit_keeps_a_selectable_collider() {
        let (goal, _) = small_grid();
        let mut session = session_over(&goal);
        session.commit().unwrap();
        assert_relative_eq!(session.collider_size().y, MIN_COLLIDER_HEIGHT);
    }

    #[test]
    fn undo_restores_the_pre_commit_source() {
        let (base, _) = small_grid();
        let goal = base.clone();
        let mut session = session_over(&goal);
        session.set_mode(TransformMode::Stretch);
        session.commit().unwrap();
        assert_ne!(session.source().positions, base.positions);
        assert!(session.can_undo());

        assert!(session.undo());
        assert_eq!(session.source().positions, base.positions);
        assert!(session.can_redo());

        assert!(session.redo());
        assert_ne!(session.source().positions, base.positions);
    }

    #[test]
    fn undo_with_no_history_is_a_quiet_no_op() {
        let (goal, _) = small_grid();
        let mut session = session_over(&goal);
        assert!(!session.undo());
        assert!(!session.redo());
        assert!(!session.reset());
    }

    #[test]
    fn reset_returns_to_the_first_committed_state() {
        let (base, _) = small_grid();
        let goal = base.clone();
        let mut session = session_over(&goal);
        for mode in [TransformMode::Stretch, TransformMode::Shear, TransformMode::Wavy] {
            session.set_mode(mode);
            session.commit().unwrap();
        }
        assert!(session.reset());
        assert_eq!(session.source().positions, base.positions);
        assert!(!session.can_undo());
        assert!(!session.can_redo());
    }

    #[test]
    fn invalid_grid_size_is_rejected_at_construction() {
        let (base, _) = small_grid();
        let goal = base.clone();
        for grid_size in [0.0, -2.0, f32::NAN] {
            let params = SessionParams::default().with_grid_size(grid_size);
            assert!(Session::new(params, base.clone(), &goal).is_err());
        }
    }
}
