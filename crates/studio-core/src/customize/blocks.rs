//! Role-specific guidance blocks, keyed by (role, engine).
//!
//! Each entry is pure data: a heading pattern, one body per known engine and
//! an optional platform axis. Roles without an entry, and any engine outside
//! Godot/Unity/Unreal, get no block.

use crate::types::{EngineKind, PlatformKind, Role};

/// Inputs a block builder may read.
#[derive(Debug, Clone, Copy)]
pub struct BlockContext<'a> {
    /// Display name from the engine config ("Unreal Engine").
    pub engine_name: &'a str,
    pub engine: EngineKind,
    pub platform: &'a str,
}

#[derive(Clone, Copy)]
enum PlatformAxis {
    None,
    BeforeEngine(fn(PlatformKind) -> Option<&'static str>),
    AfterEngine(fn(PlatformKind) -> Option<&'static str>),
}

struct RoleBlock {
    role: Role,
    /// Appended to the engine name to form the `##` heading.
    heading: &'static str,
    subheading: &'static str,
    godot: &'static str,
    unity: &'static str,
    unreal: &'static str,
    platform: PlatformAxis,
}

impl RoleBlock {
    fn body(&self, engine: EngineKind) -> &'static str {
        match engine {
            EngineKind::Godot => self.godot,
            EngineKind::Unity => self.unity,
            EngineKind::Unreal => self.unreal,
        }
    }

    fn build(&self, ctx: &BlockContext<'_>) -> String {
        let platform_text = PlatformKind::from_name(ctx.platform);
        let mut heading = format!("{}{}", ctx.engine_name, self.heading);
        let mut pieces: Vec<&str> = Vec::with_capacity(2);

        match self.platform {
            PlatformAxis::None => pieces.push(self.body(ctx.engine)),
            PlatformAxis::BeforeEngine(section) => {
                heading.push_str(&format!(" for {}", ctx.platform));
                pieces.extend(platform_text.and_then(section));
                pieces.push(self.body(ctx.engine));
            }
            PlatformAxis::AfterEngine(section) => {
                heading.push_str(&format!(" for {}", ctx.platform));
                pieces.push(self.body(ctx.engine));
                pieces.extend(platform_text.and_then(section));
            }
        }

        let mut out = format!("\n## {heading}\n\n### {}\n", self.subheading);
        for piece in pieces {
            out.push('\n');
            out.push_str(piece);
        }
        out
    }
}

/// The block for `role` on the context's engine, if the role has one.
pub fn role_block(role: Role, ctx: &BlockContext<'_>) -> Option<String> {
    ROLE_BLOCKS
        .iter()
        .find(|b| b.role == role)
        .map(|b| b.build(ctx))
}

/// Roles that carry engine-specific blocks.
pub fn roles_with_blocks() -> impl Iterator<Item = Role> {
    ROLE_BLOCKS.iter().map(|b| b.role)
}

const ROLE_BLOCKS: &[RoleBlock] = &[
    RoleBlock {
        role: Role::MechanicsDeveloper,
        heading: "-Specific Implementation",
        subheading: "Core Mechanics Implementation",
        godot: MECHANICS_GODOT,
        unity: MECHANICS_UNITY,
        unreal: MECHANICS_UNREAL,
        platform: PlatformAxis::None,
    },
    RoleBlock {
        role: Role::GameFeelDeveloper,
        heading: " Game Feel Toolkit",
        subheading: "Polish and Juice Implementation",
        godot: GAME_FEEL_GODOT,
        unity: GAME_FEEL_UNITY,
        unreal: GAME_FEEL_UNREAL,
        platform: PlatformAxis::None,
    },
    RoleBlock {
        role: Role::TechnicalArtist,
        heading: " Technical Art Pipeline",
        subheading: "Shader and VFX Development",
        godot: TECH_ART_GODOT,
        unity: TECH_ART_UNITY,
        unreal: TECH_ART_UNREAL,
        platform: PlatformAxis::None,
    },
    RoleBlock {
        role: Role::UiUxAgent,
        heading: " UI Development",
        subheading: "User Interface Implementation",
        godot: UI_GODOT,
        unity: UI_UNITY,
        unreal: UI_UNREAL,
        platform: PlatformAxis::None,
    },
    RoleBlock {
        role: Role::SrGameArtist,
        heading: " Art Pipeline",
        subheading: "Art Asset Creation and Management",
        godot: ART_GODOT,
        unity: ART_UNITY,
        unreal: ART_UNREAL,
        platform: PlatformAxis::BeforeEngine(art_platform),
    },
    RoleBlock {
        role: Role::QaAgent,
        heading: " Testing Framework",
        subheading: "Engine-Specific Testing Tools",
        godot: QA_GODOT,
        unity: QA_UNITY,
        unreal: QA_UNREAL,
        platform: PlatformAxis::AfterEngine(qa_platform),
    },
];

// ---------------------------------------------------------------------------
// Platform sections
// ---------------------------------------------------------------------------

fn art_platform(platform: PlatformKind) -> Option<&'static str> {
    Some(match platform {
        PlatformKind::Mobile => ART_MOBILE,
        PlatformKind::Pc => ART_PC,
        PlatformKind::Console => ART_CONSOLE,
    })
}

fn qa_platform(platform: PlatformKind) -> Option<&'static str> {
    match platform {
        PlatformKind::Mobile => Some(QA_MOBILE),
        PlatformKind::Pc => Some(QA_PC),
        PlatformKind::Console => None,
    }
}

const ART_MOBILE: &str = r#"**Mobile Optimization Requirements:**
- Texture sizes: Max 1024x1024 for main textures
- Use texture compression (ASTC for Android, PVRTC for iOS)
- Limit draw calls: <100 for good performance
- Polygon count: <10k triangles per character
- Use texture atlasing to reduce draw calls
"#;

const ART_PC: &str = r#"**PC Development Specifications:**
- Texture sizes: Up to 4K (4096x4096) for hero assets
- Support multiple quality levels
- Target 60 FPS at 1080p
- Use LOD systems for optimization
- Support multiple input methods
"#;

const ART_CONSOLE: &str = r#"**Console Development Requirements:**
- Platform-specific texture formats
- HDR support and wide color gamut
- 4K textures for next-gen consoles
- Platform certification requirements
- Controller-specific UI considerations
"#;

const QA_MOBILE: &str = r#"### Mobile-Specific Testing
- **Performance Testing**: Frame rate on various devices
- **Battery Testing**: Power consumption over time
- **Touch Testing**: Multi-touch and gesture recognition
- **Device Testing**: Various screen sizes and resolutions
- **Network Testing**: Poor connectivity scenarios
- **Store Testing**: Platform store submission requirements
"#;

const QA_PC: &str = r#"### PC-Specific Testing
- **Hardware Compatibility**: Various GPU/CPU combinations
- **Input Testing**: Keyboard, mouse, and controller support
- **Resolution Testing**: Multiple monitor setups and resolutions
- **Performance Scaling**: Graphics settings impact
- **Accessibility Testing**: Screen readers and colorblind support
- **Platform Testing**: Windows, Mac, and Linux compatibility
"#;

// ---------------------------------------------------------------------------
// Mechanics developer
// ---------------------------------------------------------------------------

const MECHANICS_GODOT: &str = r#"- Use **Nodes and Scenes** for game object hierarchy
- Implement mechanics with **GDScript** for rapid iteration
- Use **Signals** for event-driven programming
- Leverage **Built-in Physics** (RigidBody, CharacterBody)
- Create **Custom Resources** for data management
- Use **Autoload** for global systems and managers

### Godot-Specific Patterns
```gdscript
# Example: Player Controller
extends CharacterBody3D
class_name PlayerController

@export var speed: float = 5.0
@export var jump_velocity: float = 8.0

signal health_changed(new_health: int)

func _physics_process(delta):
    handle_movement(delta)
    handle_jump()
    move_and_slide()
```
"#;

const MECHANICS_UNITY: &str = r#"- Use **Component-based architecture** with MonoBehaviour
- Implement with **C# scripting** for performance
- Use **Events and UnityActions** for decoupling
- Leverage **Physics Components** (Rigidbody, Collider)
- Create **ScriptableObjects** for data assets
- Use **Singleton pattern** sparingly, prefer dependency injection

### Unity-Specific Patterns
```csharp
// Example: Player Controller
public class PlayerController : MonoBehaviour
{
    [SerializeField] private float speed = 5f;
    [SerializeField] private float jumpForce = 8f;

    public event System.Action<int> OnHealthChanged;

    private Rigidbody rb;

    void Start()
    {
        rb = GetComponent<Rigidbody>();
    }

    void Update()
    {
        HandleMovement();
        HandleJump();
    }
}
```
"#;

const MECHANICS_UNREAL: &str = r#"- Use **Blueprint and C++** hybrid approach
- Implement with **Unreal's Gameplay Framework**
- Use **Delegates** for event communication
- Leverage **Component system** (ActorComponents)
- Create **Data Assets** for configuration
- Use **Gameplay Ability System** for complex mechanics

### Unreal-Specific Patterns
```cpp
// Example: Player Controller Header
UCLASS()
class GAME_API APlayerController : public ACharacter
{
    GENERATED_BODY()

public:
    UPROPERTY(EditAnywhere, BlueprintReadWrite)
    float Speed = 5.0f;

    UFUNCTION(BlueprintCallable)
    void HandleMovement();

    DECLARE_DYNAMIC_MULTICAST_DELEGATE_OneParam(FOnHealthChanged, int32, NewHealth);
    UPROPERTY(BlueprintAssignable)
    FOnHealthChanged OnHealthChanged;
};
```
"#;

// ---------------------------------------------------------------------------
// Game feel developer
// ---------------------------------------------------------------------------

const GAME_FEEL_GODOT: &str = r#"- Use **Tween nodes** for smooth animations and transitions
- Create **Particle Systems** with GPUParticles2D/3D
- Implement **Custom Shaders** for visual effects
- Use **AudioStreamPlayer** nodes for dynamic audio
- Leverage **AnimationPlayer** for complex sequences
- Create **Callable** functions for responsive feedback

### Godot Juice Examples
```gdscript
# Screen shake using Tween
func screen_shake(duration: float, strength: float):
    var tween = create_tween()
    var camera = get_viewport().get_camera_3d()

    for i in range(10):
        var offset = Vector3(
            randf_range(-strength, strength),
            randf_range(-strength, strength),
            0
        )
        tween.tween_property(camera, "position", camera.position + offset, duration/10)

    tween.tween_property(camera, "position", camera.position, duration/10)
```
"#;

const GAME_FEEL_UNITY: &str = r#"- Use **DOTween** or Animation system for smooth transitions
- Create **Particle Systems** with Visual Effect Graph
- Implement **Post-processing effects** for visual polish
- Use **Audio Mixer** for dynamic audio processing
- Leverage **Cinemachine** for camera effects
- Create **Coroutines** for timed effects

### Unity Juice Examples
```csharp
// Screen shake using DOTween
public void ScreenShake(float duration, float strength)
{
    Camera.main.transform.DOShakePosition(duration, strength, 10, 90, false, true)
        .SetEase(Ease.OutQuad);
}

// Hit effect with particles and sound
public void PlayHitEffect(Vector3 position)
{
    ParticleSystem.PlayAt(position);
    AudioSource.PlayOneShot(hitSound);

    // Brief time slow
    StartCoroutine(TimeSlowEffect(0.1f, 0.5f));
}
```
"#;

const GAME_FEEL_UNREAL: &str = r#"- Use **Animation Blueprints** for character animations
- Create **Niagara Systems** for particle effects
- Implement **Post-process volumes** for visual effects
- Use **Audio Components** and **MetaSounds** for audio
- Leverage **Sequencer** for cinematic effects
- Create **Blueprint functions** for reusable effects

### Unreal Juice Examples
```cpp
// Camera shake in C++
void AGameFeelController::TriggerCameraShake(float Intensity, float Duration)
{
    if (CameraShakeClass)
    {
        GetWorld()->GetFirstPlayerController()->ClientStartCameraShake(
            CameraShakeClass, Intensity, ECameraShakePlaySpace::World
        );
    }
}
```
"#;

// ---------------------------------------------------------------------------
// Technical artist
// ---------------------------------------------------------------------------

const TECH_ART_GODOT: &str = r#"- Create **Custom Shaders** using Godot's shader language
- Use **Godot's Material system** for efficient rendering
- Implement **Custom Resources** for shader parameters
- Optimize using **Texture arrays** and **MultiMesh**
- Use **RenderingServer** for advanced techniques
- Create **Tool scripts** for artist workflows

### Godot Shader Example
```glsl
shader_type canvas_item;

uniform float dissolve_amount : hint_range(0.0, 1.0) = 0.0;
uniform texture2D dissolve_texture : hint_default_white;
uniform vec4 edge_color : source_color = vec4(1.0, 0.5, 0.0, 1.0);

void fragment() {
    vec4 tex_color = texture(TEXTURE, UV);
    float dissolve = texture(dissolve_texture, UV).r;

    if (dissolve < dissolve_amount) {
        discard;
    }

    float edge = step(dissolve_amount, dissolve) *
                 step(dissolve, dissolve_amount + 0.1);

    COLOR = mix(tex_color, edge_color, edge);
}
```
"#;

const TECH_ART_UNITY: &str = r#"- Create **Shader Graph** nodes for visual shader development
- Use **Visual Effect Graph** for complex particle systems
- Implement **Custom Render Features** in URP/HDRP
- Optimize using **GPU Instancing** and **SRP Batcher**
- Use **Compute Shaders** for complex calculations
- Create **Editor Tools** for artist workflows

### Unity Shader Graph Workflow
- Use **Master Stack** for different render pipelines
- Create **Custom Function** nodes for reusable code
- Use **Property** nodes for exposed parameters
- Implement **Keywords** for shader variants
- Optimize with **Static branching** when possible
"#;

const TECH_ART_UNREAL: &str = r#"- Create **Material Blueprints** with visual node editor
- Use **Niagara Editor** for advanced particle systems
- Implement **Custom HLSL** nodes when needed
- Optimize using **Material Instances** and **Parameters**
- Use **Material Functions** for reusable logic
- Create **Blueprint Tools** for artist workflows

### Unreal Material Best Practices
- Use **Material Instances** instead of copying materials
- Implement **Material Parameter Collections** for global changes
- Use **Material Functions** for commonly used node groups
- Optimize with **Static Switch Parameters** for variants
- Profile with **Shader Complexity** view mode
"#;

// ---------------------------------------------------------------------------
// UI/UX
// ---------------------------------------------------------------------------

const UI_GODOT: &str = r#"- Use **Control nodes** for UI layout and interaction
- Implement **Responsive design** with anchors and containers
- Create **Custom Themes** for consistent styling
- Use **Signals** for UI event handling
- Leverage **Tween** for UI animations
- Create **Custom Controls** for specialized UI elements

### Godot UI Best Practices
```gdscript
# Responsive button that adapts to content
extends Button
class_name ResponsiveButton

func _ready():
    # Connect signals
    pressed.connect(_on_button_pressed)
    mouse_entered.connect(_on_mouse_entered)
    mouse_exited.connect(_on_mouse_exited)

    # Auto-resize based on text
    custom_minimum_size = get_theme_font("font").get_string_size(text)

func _on_button_pressed():
    # Add juice with tween
    var tween = create_tween()
    tween.tween_property(self, "scale", Vector2(0.95, 0.95), 0.1)
    tween.tween_property(self, "scale", Vector2.ONE, 0.1)
```
"#;

const UI_UNITY: &str = r#"- Use **UGUI Canvas** system with proper render modes
- Implement **Responsive layouts** with Layout Groups
- Create **UI Prefabs** for reusable components
- Use **Event System** for input handling
- Leverage **DOTween** for smooth UI animations
- Create **Custom UI Components** with inheritance

### Unity UI Best Practices
```csharp
// Responsive UI panel that adapts to screen size
public class ResponsivePanel : MonoBehaviour
{
    [SerializeField] private RectTransform panelRect;
    [SerializeField] private Vector2 mobileSize = new Vector2(300, 400);
    [SerializeField] private Vector2 desktopSize = new Vector2(500, 600);

    void Start()
    {
        AdaptToScreenSize();
    }

    void AdaptToScreenSize()
    {
        bool isMobile = Screen.width < 800;
        Vector2 targetSize = isMobile ? mobileSize : desktopSize;
        panelRect.sizeDelta = targetSize;
    }
}
```
"#;

const UI_UNREAL: &str = r#"- Use **UMG Widget Blueprints** for UI creation
- Implement **Responsive design** with anchors and size boxes
- Create **Widget Styles** for consistent theming
- Use **Input bindings** and **Enhanced Input** for interaction
- Leverage **Animation tracks** for UI transitions
- Create **Custom Widget classes** in C++

### Unreal UMG Best Practices
- Use **Panel widgets** (Canvas, Horizontal/Vertical Box) for layout
- Implement **Data Binding** for dynamic content
- Create **Widget Component** for 3D UI elements
- Use **Slate** for complex custom widgets
- Optimize with **Widget pooling** for lists
"#;

// ---------------------------------------------------------------------------
// Senior game artist
// ---------------------------------------------------------------------------

const ART_GODOT: &str = r#"### Godot Art Integration
- Use **Godot's Import System** for optimal asset processing
- Create **Custom Import Plugins** for specialized workflows
- Use **Resource format** (.tres) for material assets
- Implement **Texture Arrays** for optimized rendering
- Create **3D Scenes** (.tscn) for complete art assets
- Use **Godot's built-in shader editor** for material creation
"#;

const ART_UNITY: &str = r#"### Unity Art Integration
- Use **Unity Asset Pipeline** with proper import settings
- Create **Material Presets** for consistent look
- Use **Prefab System** for art asset organization
- Implement **Texture Streaming** for large projects
- Create **Asset Bundles** for modular content
- Use **Addressable Assets** for efficient loading
"#;

const ART_UNREAL: &str = r#"### Unreal Art Integration
- Use **Unreal Import Pipeline** with FBX workflow
- Create **Material Instances** for art variants
- Use **World Partition** for large environments
- Implement **Nanite** for high-detail geometry
- Create **Data Assets** for art configuration
- Use **Lumen** for dynamic global illumination
"#;

// ---------------------------------------------------------------------------
// QA
// ---------------------------------------------------------------------------

const QA_GODOT: &str = r#"- Use **GUT (Godot Unit Test)** for automated testing
- Leverage **Godot's built-in profiler** for performance testing
- Use **Remote debugger** for device testing
- Create **Test Scenes** for specific feature testing
- Use **Export templates** for platform-specific testing
- Implement **Custom test scripts** with GDScript

### Godot Testing Example
```gdscript
# Example test script using GUT
extends GutTest

func before_each():
    # Setup before each test
    gut.p("Setting up test environment")

func test_player_movement():
    var player = preload("res://Player.tscn").instantiate()
    add_child_autofree(player)

    # Test movement
    player.move_direction = Vector3.FORWARD
    player._physics_process(0.016)  # Simulate one frame

    assert_gt(player.velocity.z, 0, "Player should move forward")
```
"#;

const QA_UNITY: &str = r#"- Use **Unity Test Framework** (UTF) for automated testing
- Leverage **Unity Profiler** for performance analysis
- Use **Device Simulator** for mobile testing
- Create **Test Assemblies** for organized testing
- Use **Cloud Build** for automated testing across platforms
- Implement **Custom Attributes** for test categorization

### Unity Testing Example
```csharp
// Example test using Unity Test Framework
[TestFixture]
public class PlayerMovementTests
{
    private GameObject playerGO;
    private PlayerController player;

    [SetUp]
    public void Setup()
    {
        playerGO = new GameObject();
        player = playerGO.AddComponent<PlayerController>();
    }

    [Test]
    public void Player_Should_Move_Forward_When_Input_Provided()
    {
        // Arrange
        Vector3 initialPosition = player.transform.position;

        // Act
        player.HandleMovement(Vector3.forward);

        // Assert
        Assert.Greater(player.transform.position.z, initialPosition.z);
    }

    [TearDown]
    public void Teardown()
    {
        Object.DestroyImmediate(playerGO);
    }
}
```
"#;

const QA_UNREAL: &str = r#"- Use **Unreal's Automation Framework** for testing
- Leverage **Stat Commands** for performance profiling
- Use **Frontend Automation** for UI testing
- Create **Functional Tests** with Blueprint or C++
- Use **Gauntlet** for large-scale testing
- Implement **Custom Test Classes** for specialized testing

### Unreal Testing Example
```cpp
// Example functional test in C++
UCLASS()
class GAME_API APlayerMovementTest : public AFunctionalTest
{
    GENERATED_BODY()

public:
    APlayerMovementTest();

protected:
    virtual void StartTest() override;

    UFUNCTION()
    void TestPlayerMovement();

    UPROPERTY(EditAnywhere)
    TSubclassOf<APawn> PlayerClass;
};
```
"#;
