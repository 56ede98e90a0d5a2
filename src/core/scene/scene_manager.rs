//=========================================================================
// Scene Manager
//=========================================================================
//
// Manages scene registration, stack operations, and lifecycle.
//
// Scenes are stored in a HashMap by key and referenced via a stack
// of keys. Only the topmost scene ticks.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::time::Duration;

use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use crate::core::globals::GlobalContext;
use crate::core::input::Action;
use super::Scene;

//=== Scene Transition ====================================================

/// Encapsulates scene stack operations.
///
/// Scenes are managed via a stack-based system where transitions control
/// the flow between different game states (loading, room, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneTransition<K: SceneKey> {
    /// Adds a new scene to the top of the stack.
    Push(K),

    /// Removes a specific scene from the stack by key.
    Remove(K),

    /// Replaces a specific scene with another scene.
    Replace(K, K),

    /// Clears all scenes from the stack.
    Clear,

    /// No transition occurs.
    Empty,
}

impl<K: SceneKey> Default for SceneTransition<K> {
    fn default() -> Self {
        Self::Empty
    }
}

//=== Scene Key Trait =====================================================

/// Marker trait for scene identifiers.
///
/// Scene keys uniquely identify scenes in the SceneManager's HashMap.
/// Typically implemented by game-specific enums.
pub trait SceneKey: Clone + Copy + Eq + Hash + Debug + Send + 'static {}

//=== Scene Manager =======================================================

/// Manages scene lifecycle and stack-based scene switching.
///
/// Scenes are registered once and referenced by key. The topmost scene
/// on the stack is the one that ticks.
pub struct SceneManager<S: SceneKey, A: Action> {
    scenes: HashMap<S, Box<dyn Scene<S, A>>>,
    stack: Vec<S>,
}

impl<S: SceneKey, A: Action> SceneManager<S, A> {
    //--- Construction -----------------------------------------------------

    /// Creates a new scene manager with an empty stack.
    pub fn new() -> Self {
        Self {
            scenes: HashMap::new(),
            stack: Vec::new(),
        }
    }

    //--- Registration -----------------------------------------------------

    /// Registers a scene with the manager.
    ///
    /// Scenes must be registered before being pushed to the stack.
    /// The scene is automatically boxed for storage.
    pub fn register_scene<T>(&mut self, key: S, scene: T)
    where
        T: Scene<S, A> + 'static,
    {
        if self.scenes.insert(key, Box::new(scene)).is_some() {
            warn!("Scene {:?} was already registered and has been replaced", key);
        }
    }

    /// Registers a scene and adds it to the stack as the starting scene.
    ///
    /// Its `initialize` hook runs when [`start`](Self::start) is called.
    pub fn register_default<T>(&mut self, key: S, scene: T)
    where
        T: Scene<S, A> + 'static,
    {
        self.register_scene(key, scene);

        if self.stack.contains(&key) {
            warn!("Scene {:?} is already in the stack", key);
        } else {
            debug!("Registered scene {:?} as default and added to stack", key);
            self.stack.push(key);
        }
    }

    /// Initializes every scene already on the stack, bottom-up.
    pub fn start(&mut self, context: &mut GlobalContext<S, A>) {
        for &key in &self.stack {
            info!("Starting scene {:?}", key);
            match self.scenes.get_mut(&key) {
                Some(scene) => scene.initialize(context),
                None => warn!("Initial scene {:?} not registered", key),
            }
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Returns the scene currently on top of the stack.
    pub fn active_scene(&self) -> Option<S> {
        self.stack.last().copied()
    }

    /// Returns `true` when no scene is on the stack.
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Returns `true` if `key` has been registered.
    pub fn is_registered(&self, key: S) -> bool {
        self.scenes.contains_key(&key)
    }

    //--- Update Loop ------------------------------------------------------

    /// Ticks the topmost scene.
    pub fn update(&mut self, context: &mut GlobalContext<S, A>, elapsed: Duration) {
        let Some(&top) = self.stack.last() else {
            return;
        };

        if let Some(scene) = self.scenes.get_mut(&top) {
            scene.tick(context, elapsed);
        }
    }

    //--- Transition Processing --------------------------------------------

    /// Processes all queued scene transitions.
    ///
    /// Should be called at the tick boundary after scene updates.
    /// Transitions are processed in FIFO order, with lifecycle hooks
    /// (initialize/teardown) invoked for affected scenes. Transitions queued
    /// by those hooks are left for the next tick boundary.
    pub fn process_transitions(&mut self, context: &mut GlobalContext<S, A>) {
        let transitions = context.scene_transitions.take();

        for transition in transitions {
            match transition {
                SceneTransition::Push(key) => self.push_internal(key, context),
                SceneTransition::Remove(key) => self.remove_internal(key, context),
                SceneTransition::Replace(old_key, new_key) => {
                    self.replace_internal(old_key, new_key, context)
                }
                SceneTransition::Clear => self.clear_internal(context),
                SceneTransition::Empty => {}
            }
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn push_internal(&mut self, key: S, context: &mut GlobalContext<S, A>) {
        if self.stack.contains(&key) {
            warn!("Scene {:?} is already in the stack, skipping push", key);
            return;
        }

        let Some(scene) = self.scenes.get_mut(&key) else {
            warn!("Attempted to push unregistered scene {:?}", key);
            return;
        };

        debug!("Pushing scene {:?} onto stack", key);
        self.stack.push(key);
        scene.initialize(context);
    }

    fn remove_internal(&mut self, key: S, context: &mut GlobalContext<S, A>) {
        if let Some(pos) = self.stack.iter().position(|&k| k == key) {
            debug!("Removing scene {:?} from stack at position {}", key, pos);
            self.stack.remove(pos);

            if let Some(scene) = self.scenes.get_mut(&key) {
                scene.teardown(context);
            }
        } else {
            debug!("Scene {:?} not found in stack, skipping removal", key);
        }
    }

    fn replace_internal(&mut self, old_key: S, new_key: S, context: &mut GlobalContext<S, A>) {
        let Some(pos) = self.stack.iter().position(|&k| k == old_key) else {
            warn!("Scene {:?} not found in stack, skipping replacement", old_key);
            return;
        };

        if self.stack.contains(&new_key) {
            warn!("Scene {:?} is already in the stack, skipping replacement", new_key);
            return;
        }

        if !self.scenes.contains_key(&new_key) {
            warn!("Attempted to replace with unregistered scene {:?}", new_key);
            return;
        }

        debug!("Replacing scene {:?} with {:?} at position {}", old_key, new_key, pos);

        if let Some(scene) = self.scenes.get_mut(&old_key) {
            scene.teardown(context);
        }

        self.stack[pos] = new_key;

        if let Some(scene) = self.scenes.get_mut(&new_key) {
            scene.initialize(context);
        }
    }

    fn clear_internal(&mut self, context: &mut GlobalContext<S, A>) {
        debug!("Clearing all scenes from stack");

        // Tear down top-first, mirroring how the stack was built
        for key in self.stack.drain(..).rev() {
            if let Some(scene) = self.scenes.get_mut(&key) {
                scene.teardown(context);
            }
        }
    }
}

impl<S: SceneKey, A: Action> Default for SceneManager<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
    enum TestScene {
        A,
        B,
        C,
    }

    impl SceneKey for TestScene {}

    #[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
    enum TestAction {
        Go,
    }

    impl Action for TestAction {}

    type Log = Rc<RefCell<Vec<String>>>;

    /// Records every lifecycle call into a shared log.
    struct Recorder {
        name: &'static str,
        log: Log,
        on_tick: Option<SceneTransition<TestScene>>,
    }

    impl Recorder {
        fn new(name: &'static str, log: &Log) -> Self {
            Self { name, log: Rc::clone(log), on_tick: None }
        }
    }

    impl Scene<TestScene, TestAction> for Recorder {
        fn initialize(&mut self, _context: &mut GlobalContext<TestScene, TestAction>) {
            self.log.borrow_mut().push(format!("{}:init", self.name));
        }

        fn tick(&mut self, context: &mut GlobalContext<TestScene, TestAction>, _elapsed: Duration) {
            self.log.borrow_mut().push(format!("{}:tick", self.name));
            if let Some(transition) = self.on_tick.take() {
                context.scene_transitions.push(transition);
            }
        }

        fn teardown(&mut self, _context: &mut GlobalContext<TestScene, TestAction>) {
            self.log.borrow_mut().push(format!("{}:teardown", self.name));
        }
    }

    fn setup() -> (SceneManager<TestScene, TestAction>, GlobalContext<TestScene, TestAction>, Log) {
        (SceneManager::new(), GlobalContext::new(), Rc::new(RefCell::new(Vec::new())))
    }

    fn entries(log: &Log) -> Vec<String> {
        log.borrow().clone()
    }

    const TICK: Duration = Duration::from_millis(16);

    //--- SceneTransition Tests --------------------------------------------

    #[test]
    fn transition_default_is_empty() {
        let transition: SceneTransition<TestScene> = SceneTransition::default();
        assert_eq!(transition, SceneTransition::Empty);
    }

    //--- Lifecycle Tests --------------------------------------------------

    #[test]
    fn start_initializes_default_scene() {
        let (mut manager, mut ctx, log) = setup();
        manager.register_default(TestScene::A, Recorder::new("a", &log));

        manager.start(&mut ctx);

        assert_eq!(entries(&log), vec!["a:init"]);
        assert_eq!(manager.active_scene(), Some(TestScene::A));
    }

    #[test]
    fn only_top_scene_ticks() {
        let (mut manager, mut ctx, log) = setup();
        manager.register_default(TestScene::A, Recorder::new("a", &log));
        manager.register_scene(TestScene::B, Recorder::new("b", &log));
        manager.start(&mut ctx);

        ctx.scene_transitions.push(SceneTransition::Push(TestScene::B));
        manager.process_transitions(&mut ctx);
        manager.update(&mut ctx, TICK);

        assert_eq!(entries(&log), vec!["a:init", "b:init", "b:tick"]);
    }

    #[test]
    fn replace_tears_down_then_initializes() {
        let (mut manager, mut ctx, log) = setup();
        let mut a = Recorder::new("a", &log);
        a.on_tick = Some(SceneTransition::Replace(TestScene::A, TestScene::B));
        manager.register_default(TestScene::A, a);
        manager.register_scene(TestScene::B, Recorder::new("b", &log));
        manager.start(&mut ctx);

        manager.update(&mut ctx, TICK);
        // Queued during the tick, not applied yet
        assert_eq!(manager.active_scene(), Some(TestScene::A));

        manager.process_transitions(&mut ctx);

        assert_eq!(entries(&log), vec!["a:init", "a:tick", "a:teardown", "b:init"]);
        assert_eq!(manager.active_scene(), Some(TestScene::B));
    }

    #[test]
    fn reentering_a_scene_initializes_it_again() {
        let (mut manager, mut ctx, log) = setup();
        manager.register_default(TestScene::A, Recorder::new("a", &log));
        manager.register_scene(TestScene::B, Recorder::new("b", &log));
        manager.start(&mut ctx);

        ctx.scene_transitions.push(SceneTransition::Replace(TestScene::A, TestScene::B));
        ctx.scene_transitions.push(SceneTransition::Replace(TestScene::B, TestScene::A));
        manager.process_transitions(&mut ctx);

        assert_eq!(
            entries(&log),
            vec!["a:init", "a:teardown", "b:init", "b:teardown", "a:init"]
        );
    }

    #[test]
    fn unregistered_push_is_ignored() {
        let (mut manager, mut ctx, log) = setup();
        manager.register_default(TestScene::A, Recorder::new("a", &log));
        manager.start(&mut ctx);

        ctx.scene_transitions.push(SceneTransition::Push(TestScene::C));
        manager.process_transitions(&mut ctx);

        assert_eq!(manager.active_scene(), Some(TestScene::A));
        assert!(!manager.is_registered(TestScene::C));
    }

    #[test]
    fn duplicate_push_is_ignored() {
        let (mut manager, mut ctx, log) = setup();
        manager.register_default(TestScene::A, Recorder::new("a", &log));
        manager.start(&mut ctx);

        ctx.scene_transitions.push(SceneTransition::Push(TestScene::A));
        manager.process_transitions(&mut ctx);

        assert_eq!(entries(&log), vec!["a:init"]);
    }

    #[test]
    fn clear_tears_down_top_first() {
        let (mut manager, mut ctx, log) = setup();
        manager.register_default(TestScene::A, Recorder::new("a", &log));
        manager.register_scene(TestScene::B, Recorder::new("b", &log));
        manager.start(&mut ctx);

        ctx.scene_transitions.push(SceneTransition::Push(TestScene::B));
        ctx.scene_transitions.push(SceneTransition::Clear);
        manager.process_transitions(&mut ctx);

        assert_eq!(entries(&log), vec!["a:init", "b:init", "b:teardown", "a:teardown"]);
        assert!(manager.is_empty());
    }

    #[test]
    fn remove_missing_scene_is_noop() {
        let (mut manager, mut ctx, log) = setup();
        manager.register_default(TestScene::A, Recorder::new("a", &log));
        manager.start(&mut ctx);

        ctx.scene_transitions.push(SceneTransition::Remove(TestScene::B));
        manager.process_transitions(&mut ctx);

        assert_eq!(manager.active_scene(), Some(TestScene::A));
    }

    #[test]
    fn update_on_empty_stack_is_noop() {
        let (mut manager, mut ctx, _log) = setup();
        manager.update(&mut ctx, TICK);
        assert!(manager.is_empty());
    }
}
