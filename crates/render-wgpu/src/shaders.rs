/// WGSL shader for instanced voxel cubes.
pub const VOXEL_SHADER: &str = r#"
struct Uniforms {
    view_proj: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
};

struct InstanceInput {
    @location(2) model_0: vec4<f32>,
    @location(3) model_1: vec4<f32>,
    @location(4) model_2: vec4<f32>,
    @location(5) model_3: vec4<f32>,
    @location(6) color: vec4<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_normal: vec3<f32>,
    @location(1) color: vec4<f32>,
    @location(2) local: vec3<f32>,
};

@vertex
fn vs_main(vertex: VertexInput, instance: InstanceInput) -> VertexOutput {
    let model = mat4x4<f32>(
        instance.model_0,
        instance.model_1,
        instance.model_2,
        instance.model_3,
    );
    var out: VertexOutput;
    out.clip_position = uniforms.view_proj * model * vec4<f32>(vertex.position, 1.0);
    out.world_normal = normalize((model * vec4<f32>(vertex.normal, 0.0)).xyz);
    out.color = instance.color;
    out.local = vertex.position;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    // Darken cube edges so neighbouring voxels stay distinguishable.
    let a = abs(in.local) * 2.0;
    let edge = step(0.94, a.x) * step(0.94, a.y)
        + step(0.94, a.y) * step(0.94, a.z)
        + step(0.94, a.x) * step(0.94, a.z);
    let outline = 1.0 - 0.6 * min(edge, 1.0);

    let light_dir = normalize(vec3<f32>(0.3, 1.0, 0.5));
    let lighting = 0.3 + max(dot(in.world_normal, light_dir), 0.0) * 0.7;
    return vec4<f32>(in.color.rgb * lighting * outline, in.color.a);
}
"#;
