use crate::constants::PACKED_FREQUENCY_LEN;
use crate::uniforms::ShaderUniforms;
use glam::Mat4;

/// GPU layout of the plane's uniform block; must match `Uniforms` in plane.wgsl.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PlaneUniforms {
    pub(crate) mvp: [[f32; 4]; 4],
    pub(crate) size: [f32; 2],
    pub(crate) _pad: [f32; 2],
    pub(crate) frequency_data: [[f32; 4]; PACKED_FREQUENCY_LEN],
}

impl PlaneUniforms {
    pub(crate) fn from_host(mvp: Mat4, host: &ShaderUniforms) -> Self {
        let mut frequency_data = [[0.0; 4]; PACKED_FREQUENCY_LEN];
        for (dst, v) in frequency_data.iter_mut().zip(host.frequency_data()) {
            *dst = v.to_array();
        }
        Self {
            mvp: mvp.to_cols_array_2d(),
            size: host.size().to_array(),
            _pad: [0.0; 2],
            frequency_data,
        }
    }
}

pub(crate) struct PlaneResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

pub(crate) fn create_plane_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
) -> PlaneResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("plane_shader"),
        source: wgpu::ShaderSource::Wgsl(super::PLANE_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("plane_bgl"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("plane_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("plane_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_plane"),
            buffers: &[],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_plane"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });
    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("plane_uniforms"),
        size: std::mem::size_of::<PlaneUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("plane_bg"),
        layout: &bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });

    PlaneResources {
        pipeline,
        uniform_buffer,
        bind_group,
    }
}
