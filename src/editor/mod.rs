//! Editor frame loop: input, picking, brush and scene edits
//!
//! [`Editor`] owns every piece of editing state and runs one ordered pass per
//! rendered frame:
//!
//! 1. gesture from input (button level over the viewport)
//! 2. resolve the hover target against the id buffer and the grid
//! 3. brush update
//! 4. apply: voxel edits land immediately, a box gesture is previewed
//!    every frame and committed when the button is released

pub mod config;

pub use config::EditorConfig;

use winit::event::WindowEvent;

use crate::core::types::{Result, Vec2, UVec2};
use crate::core::{Camera, InputState};
use crate::pick::{HitResolver, HoverTarget, IdBuffer, IdBufferSource, PickInput};
use crate::voxel::{
    BrushEngine, BrushGesture, BrushMode, BrushUsage, EditSink, EditStats, Palette, VoxelEdit,
    VoxelScene,
};

/// What one [`Editor::update`] did
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameOutcome {
    pub hovered: HoverTarget,
    /// Brush output for this frame
    pub emitted: Vec<VoxelEdit>,
    /// Scene changes made this frame
    pub committed: EditStats,
}

/// Voxel editor state
pub struct Editor {
    config: EditorConfig,
    scene: VoxelScene,
    palette: Palette,
    camera: Camera,
    input: InputState,
    resolver: HitResolver,
    brush: BrushEngine,
    gesture: BrushGesture,
    hovered: HoverTarget,
    /// Region the active box gesture will commit on release
    box_preview: Vec<VoxelEdit>,
}

impl Editor {
    pub fn new(config: EditorConfig) -> Result<Self> {
        config.validate()?;

        let viewport = config.viewport_size();
        let aspect = viewport.x as f32 / viewport.y as f32;
        let editor = Self {
            scene: VoxelScene::new(config.grid_size),
            palette: config.build_palette()?,
            camera: Camera::framing_grid(config.grid_size, config.fov_degrees, aspect),
            input: InputState::new(viewport),
            resolver: HitResolver::new(config.grid_size),
            brush: BrushEngine::new(),
            gesture: BrushGesture::new(config.brush_mode, config.brush_usage),
            hovered: HoverTarget::none(),
            box_preview: Vec::new(),
            config,
        };

        log::info!(
            "Editor ready: grid 0..={}, viewport {}x{}, {} palette colors",
            editor.config.grid_size, viewport.x, viewport.y, editor.palette.len()
        );
        Ok(editor)
    }

    /// Run one frame against this frame's id buffer.
    ///
    /// A resolve failure aborts the frame: the hover target resets to nothing,
    /// the brush is not run, and the button transition is replayed next frame.
    pub fn update(&mut self, id_buffer: &dyn IdBufferSource) -> Result<FrameOutcome> {
        let was_started = self.gesture.started;
        self.gesture.started = self.input.is_brush_held();

        let pick = PickInput::from_input(&self.input);
        self.hovered = match self.resolver.resolve(&pick, id_buffer, &self.scene, &self.camera) {
            Ok(target) => target,
            Err(e) => {
                self.hovered = HoverTarget::none();
                self.gesture.started = was_started;
                return Err(e);
            }
        };

        let emitted = self.brush.update(&self.hovered, &self.gesture);
        let material = self.palette.selected();
        let mut committed = EditStats::default();

        match self.gesture.mode {
            BrushMode::Voxel => {
                committed = self.scene.apply_edits(&emitted, material)?;
            }
            BrushMode::Box if self.gesture.started => {
                if !emitted.is_empty() {
                    self.box_preview.clone_from(&emitted);
                }
            }
            BrushMode::Box => {
                if was_started && !self.box_preview.is_empty() {
                    let preview = std::mem::take(&mut self.box_preview);
                    log::debug!("Committing box of {} cells", preview.len());
                    committed = self.scene.apply_edits(&preview, material)?;
                }
            }
        }

        Ok(FrameOutcome {
            hovered: self.hovered,
            emitted,
            committed,
        })
    }

    /// Rasterize the scene into `buffer` at viewport size with the software
    /// id pass. Hosts with a GPU id pass read back into an [`IdBuffer`]
    /// instead.
    pub fn render_id_buffer(&self, buffer: &mut IdBuffer) {
        let size = self.input.viewport_size();
        if buffer.size() != size {
            buffer.resize(size);
        }
        buffer.render_scene(&self.scene, &self.camera);
    }

    /// Feed a window event to the input state
    pub fn process_event(&mut self, event: &WindowEvent) {
        self.input.process_event(event);
    }

    /// Viewport moved or resized inside the window
    pub fn set_viewport(&mut self, origin: Vec2, size: UVec2) {
        self.input.set_viewport(origin, size);
        self.camera.set_aspect(size.x as f32, size.y as f32);
    }

    pub fn set_brush_mode(&mut self, mode: BrushMode) {
        if self.gesture.mode != mode {
            self.gesture.mode = mode;
            self.cancel_gesture();
        }
    }

    pub fn set_brush_usage(&mut self, usage: BrushUsage) {
        if self.gesture.usage != usage {
            self.gesture.usage = usage;
            self.cancel_gesture();
        }
    }

    /// Select the palette colour used for new and painted voxels
    pub fn select_material(&mut self, index: u8) -> Result<()> {
        self.palette.select(index)
    }

    // Switching tools mid-drag drops the drag; the user starts a new gesture.
    fn cancel_gesture(&mut self) {
        self.brush = BrushEngine::new();
        self.box_preview.clear();
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn scene(&self) -> &VoxelScene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut VoxelScene {
        &mut self.scene
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn resolver(&self) -> &HitResolver {
        &self.resolver
    }

    pub fn gesture(&self) -> &BrushGesture {
        &self.gesture
    }

    pub fn hovered(&self) -> &HoverTarget {
        &self.hovered
    }

    pub fn box_preview(&self) -> &[VoxelEdit] {
        &self.box_preview
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Error;
    use crate::voxel::{EntityId, Face};
    use glam::{IVec3, Vec3};
    use winit::event::{ElementState, MouseButton};

    const VIEWPORT: u32 = 65;

    /// Editor with a square viewport and a camera looking straight down on
    /// the middle of the floor.
    fn top_down_editor(mode: BrushMode, usage: BrushUsage) -> Editor {
        let config = EditorConfig {
            viewport: [VIEWPORT, VIEWPORT],
            brush_mode: mode,
            brush_usage: usage,
            ..Default::default()
        };
        let mut editor = Editor::new(config).unwrap();
        let mut camera = Camera::look_at(Vec3::new(4.0, 20.0, 4.01), Vec3::new(4.0, 0.0, 4.0), Vec3::Y);
        camera.set_aspect(VIEWPORT as f32, VIEWPORT as f32);
        *editor.camera_mut() = camera;
        // Column 32 and row 65 - 33 = 32: the centre id pixel
        editor.input_mut().cursor_moved(Vec2::new(32.5, 33.0));
        editor
    }

    fn press(editor: &mut Editor, pressed: bool) {
        let state = if pressed { ElementState::Pressed } else { ElementState::Released };
        editor.input_mut().mouse_button(MouseButton::Left, state);
    }

    fn frame(editor: &mut Editor) -> FrameOutcome {
        let mut ids = IdBuffer::new(UVec2::ZERO);
        editor.render_id_buffer(&mut ids);
        editor.update(&ids).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = EditorConfig { grid_size: 0, ..Default::default() };
        assert!(matches!(Editor::new(config), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_hover_without_button_edits_nothing() {
        let mut editor = top_down_editor(BrushMode::Voxel, BrushUsage::Add);
        let outcome = frame(&mut editor);

        assert_eq!(outcome.hovered, HoverTarget::grid(IVec3::new(4, 0, 4), Face::Top));
        assert!(outcome.emitted.is_empty());
        assert!(editor.scene().is_empty());
    }

    #[test]
    fn test_voxel_brush_stacks_on_hit_face() {
        let mut editor = top_down_editor(BrushMode::Voxel, BrushUsage::Add);
        press(&mut editor, true);

        // Empty floor first, then the top of each new voxel
        for y in 0..3 {
            let outcome = frame(&mut editor);
            assert_eq!(outcome.emitted, vec![VoxelEdit { position: IVec3::new(4, y, 4), kind: BrushUsage::Add }]);
            assert_eq!(outcome.committed.added, 1);
        }
        assert_eq!(editor.scene().len(), 3);
        assert!(editor.hovered().is_existing_voxel);

        press(&mut editor, false);
        let outcome = frame(&mut editor);
        assert!(outcome.emitted.is_empty());
        assert_eq!(outcome.hovered.position, IVec3::new(4, 2, 4));
    }

    #[test]
    fn test_voxel_brush_uses_selected_material() {
        let mut editor = top_down_editor(BrushMode::Voxel, BrushUsage::Add);
        editor.select_material(5).unwrap();
        assert!(editor.select_material(200).is_err());

        press(&mut editor, true);
        frame(&mut editor);

        let id = editor.scene().entity_at(IVec3::new(4, 0, 4)).unwrap();
        assert_eq!(editor.scene().material_of(id).unwrap(), 5);
    }

    #[test]
    fn test_remove_brush() {
        let mut editor = top_down_editor(BrushMode::Voxel, BrushUsage::Remove);
        editor.scene_mut().spawn_voxel(IVec3::new(4, 0, 4), 0).unwrap();

        press(&mut editor, true);
        let outcome = frame(&mut editor);

        // Remove targets the neighbour across the hit face, which is empty
        assert_eq!(outcome.emitted[0].position, IVec3::new(4, 1, 4));
        assert_eq!(outcome.committed.skipped, 1);
        assert_eq!(editor.scene().len(), 1);
    }

    #[test]
    fn test_box_brush_previews_then_commits() {
        let mut editor = top_down_editor(BrushMode::Box, BrushUsage::Add);
        press(&mut editor, true);

        let outcome = frame(&mut editor);
        assert_eq!(outcome.emitted.len(), 1);
        assert_eq!(editor.box_preview().len(), 1);
        assert!(editor.scene().is_empty());

        editor.input_mut().cursor_moved(Vec2::new(44.5, 40.0));
        let end = editor.resolver().raycast_grid(editor.input().ndc_mouse_position(), editor.camera());
        assert!(end.exists);
        let extent = (end.position - IVec3::new(4, 0, 4)).abs() + IVec3::ONE;
        let volume = (extent.x * extent.y * extent.z) as usize;
        assert!(volume > 1);

        let outcome = frame(&mut editor);
        assert_eq!(outcome.emitted.len(), volume);
        assert_eq!(editor.box_preview().len(), volume);
        assert_eq!(outcome.committed, EditStats::default());
        assert!(editor.scene().is_empty());

        press(&mut editor, false);
        let outcome = frame(&mut editor);
        assert!(outcome.emitted.is_empty());
        assert_eq!(outcome.committed.added, volume);
        assert_eq!(editor.scene().len(), volume);
        assert!(editor.box_preview().is_empty());
    }

    #[test]
    fn test_box_preview_survives_frames_without_hover() {
        let mut editor = top_down_editor(BrushMode::Box, BrushUsage::Add);
        press(&mut editor, true);
        frame(&mut editor);

        // Straight up out of the volume: nothing hovered
        *editor.camera_mut() = Camera::look_at(Vec3::new(4.0, 20.0, 4.0), Vec3::new(4.0, 40.0, 4.01), Vec3::Y);
        let outcome = frame(&mut editor);
        assert!(!outcome.hovered.exists);
        assert_eq!(editor.box_preview().len(), 1);

        press(&mut editor, false);
        let outcome = frame(&mut editor);
        assert_eq!(outcome.committed.added, 1);
    }

    #[test]
    fn test_mode_switch_cancels_box() {
        let mut editor = top_down_editor(BrushMode::Box, BrushUsage::Add);
        press(&mut editor, true);
        frame(&mut editor);
        assert!(!editor.box_preview().is_empty());

        editor.set_brush_mode(BrushMode::Voxel);
        assert!(editor.box_preview().is_empty());
        assert_eq!(editor.gesture().mode, BrushMode::Voxel);
    }

    #[test]
    fn test_resolve_error_aborts_frame() {
        let mut editor = top_down_editor(BrushMode::Voxel, BrushUsage::Add);
        press(&mut editor, true);

        let mut ids = IdBuffer::new(UVec2::splat(VIEWPORT));
        ids.write(32, 32, EntityId(42), Face::Top);

        let result = editor.update(&ids);
        assert!(matches!(result, Err(Error::UnknownEntity(EntityId(42)))));
        assert!(!editor.hovered().exists);
        assert!(editor.scene().is_empty());

        // Next frame retries with a good buffer
        let outcome = frame(&mut editor);
        assert_eq!(outcome.committed.added, 1);
    }

    #[test]
    fn test_release_outside_viewport() {
        let mut editor = top_down_editor(BrushMode::Voxel, BrushUsage::Add);
        press(&mut editor, true);
        editor.input_mut().cursor_moved(Vec2::new(-5.0, 10.0));

        let outcome = frame(&mut editor);
        assert!(!editor.gesture().started);
        assert!(outcome.emitted.is_empty());
    }

    #[test]
    fn test_set_viewport_updates_camera() {
        let mut editor = Editor::new(EditorConfig::default()).unwrap();
        editor.set_viewport(Vec2::new(200.0, 0.0), UVec2::new(400, 400));
        assert_eq!(editor.camera().aspect, 1.0);
        assert_eq!(editor.input().viewport_size(), UVec2::new(400, 400));

        let mut ids = IdBuffer::new(UVec2::ONE);
        editor.render_id_buffer(&mut ids);
        assert_eq!(ids.size(), UVec2::new(400, 400));
    }
}
