//! Direct3D 11 device factory, draw-list renderer and window host.

use std::collections::HashMap;

use ahash::RandomState;
use ragnarek_core::{Color, Context, DrawVert, FontAtlas, RenderFrame, Renderer, TextureId, Vec2};
use windows::core::s;
use windows::Win32::Foundation::{BOOL, HMODULE, HWND, RECT};
use windows::Win32::Graphics::Direct3D::Fxc::D3DCompile;
use windows::Win32::Graphics::Direct3D::{
    ID3DBlob, D3D11_PRIMITIVE_TOPOLOGY_TRIANGLELIST, D3D_DRIVER_TYPE, D3D_DRIVER_TYPE_HARDWARE,
    D3D_DRIVER_TYPE_WARP, D3D_FEATURE_LEVEL_10_0, D3D_FEATURE_LEVEL_11_0,
};
use windows::Win32::Graphics::Direct3D11::*;
use windows::Win32::Graphics::Dxgi::Common::{
    DXGI_FORMAT_R16_UINT, DXGI_FORMAT_R32G32_FLOAT, DXGI_FORMAT_R8G8B8A8_UNORM, DXGI_FORMAT_UNKNOWN,
    DXGI_MODE_DESC, DXGI_RATIONAL, DXGI_SAMPLE_DESC,
};
use windows::Win32::Graphics::Dxgi::{
    IDXGISwapChain, DXGI_ERROR_UNSUPPORTED, DXGI_PRESENT, DXGI_SWAP_CHAIN_DESC, DXGI_SWAP_CHAIN_FLAG,
    DXGI_SWAP_CHAIN_FLAG_ALLOW_MODE_SWITCH, DXGI_SWAP_EFFECT_DISCARD, DXGI_USAGE_RENDER_TARGET_OUTPUT,
};

use crate::{
    app::{Host, Pump},
    batch,
    config::WindowConfig,
    device::{DeviceError, DeviceFactory, DriverKind, GraphicsResources},
    events,
    font::MetricFont,
    win32::Window,
    Dx11Error,
};

const VERTEX_SLACK: usize = 5000;
const INDEX_SLACK:  usize = 10000;

const SHADER: &str = r#"
cbuffer Projection : register(b0) { float4x4 ProjectionMatrix; };

struct VS_INPUT  { float2 pos : POSITION; float2 uv : TEXCOORD0; float4 col : COLOR0; };
struct PS_INPUT  { float4 pos : SV_POSITION; float4 col : COLOR0; float2 uv : TEXCOORD0; };

PS_INPUT vs_main(VS_INPUT input) {
    PS_INPUT output;
    output.pos = mul(ProjectionMatrix, float4(input.pos.xy, 0.f, 1.f));
    output.col = input.col;
    output.uv  = input.uv;
    return output;
}

Texture2D    texture0 : register(t0);
SamplerState sampler0 : register(s0);

float4 ps_main(PS_INPUT input) : SV_Target {
    return input.col * texture0.Sample(sampler0, input.uv);
}
"#;

fn hr(e: windows::core::Error) -> String { format!("{e}") }

// ─── Factory ─────────────────────────────────────────────────────────────────

pub struct D3d11Factory {
    hwnd: HWND,
}

impl D3d11Factory {
    pub fn new(hwnd: HWND) -> Self { Self { hwnd } }
}

impl DeviceFactory for D3d11Factory {
    type SwapChain    = IDXGISwapChain;
    type Device       = ID3D11Device;
    type Context      = ID3D11DeviceContext;
    type RenderTarget = ID3D11RenderTargetView;

    fn create_device(
        &mut self,
        driver: DriverKind,
    ) -> Result<(IDXGISwapChain, ID3D11Device, ID3D11DeviceContext), DeviceError> {
        let driver_type: D3D_DRIVER_TYPE = match driver {
            DriverKind::Hardware => D3D_DRIVER_TYPE_HARDWARE,
            DriverKind::Warp     => D3D_DRIVER_TYPE_WARP,
        };
        let desc = DXGI_SWAP_CHAIN_DESC {
            BufferDesc: DXGI_MODE_DESC {
                RefreshRate: DXGI_RATIONAL { Numerator: 60, Denominator: 1 },
                Format:      DXGI_FORMAT_R8G8B8A8_UNORM,
                ..Default::default()
            },
            SampleDesc:   DXGI_SAMPLE_DESC { Count: 1, Quality: 0 },
            BufferUsage:  DXGI_USAGE_RENDER_TARGET_OUTPUT,
            BufferCount:  2,
            OutputWindow: self.hwnd,
            Windowed:     BOOL(1),
            SwapEffect:   DXGI_SWAP_EFFECT_DISCARD,
            Flags:        DXGI_SWAP_CHAIN_FLAG_ALLOW_MODE_SWITCH.0 as u32,
        };

        let mut swap_chain = None;
        let mut device     = None;
        let mut context    = None;
        let result = unsafe {
            D3D11CreateDeviceAndSwapChain(
                None,
                driver_type,
                HMODULE::default(),
                D3D11_CREATE_DEVICE_FLAG(0),
                Some(&[D3D_FEATURE_LEVEL_11_0, D3D_FEATURE_LEVEL_10_0]),
                D3D11_SDK_VERSION,
                Some(&desc),
                Some(&mut swap_chain),
                Some(&mut device),
                None,
                Some(&mut context),
            )
        };
        match result {
            Err(e) if e.code() == DXGI_ERROR_UNSUPPORTED => return Err(DeviceError::Unsupported(driver)),
            Err(e) => return Err(DeviceError::Create(hr(e))),
            Ok(()) => {}
        }
        match (swap_chain, device, context) {
            (Some(sc), Some(dev), Some(ctx)) => Ok((sc, dev, ctx)),
            _ => Err(DeviceError::Create("D3D11CreateDeviceAndSwapChain returned no objects".to_owned())),
        }
    }

    fn create_render_target(
        &mut self,
        swap_chain: &IDXGISwapChain,
        device:     &ID3D11Device,
    ) -> Result<ID3D11RenderTargetView, DeviceError> {
        unsafe {
            let back: ID3D11Texture2D = swap_chain.GetBuffer(0).map_err(|e| DeviceError::RenderTarget(hr(e)))?;
            let mut rtv = None;
            device
                .CreateRenderTargetView(&back, None, Some(&mut rtv))
                .map_err(|e| DeviceError::RenderTarget(hr(e)))?;
            rtv.ok_or_else(|| DeviceError::RenderTarget("no view returned".to_owned()))
        }
    }

    fn resize_buffers(&mut self, swap_chain: &IDXGISwapChain, width: u32, height: u32) -> Result<(), DeviceError> {
        unsafe {
            swap_chain
                .ResizeBuffers(0, width, height, DXGI_FORMAT_UNKNOWN, DXGI_SWAP_CHAIN_FLAG(0))
                .map_err(|e| DeviceError::Resize(hr(e)))
        }
    }
}

// ─── Renderer ────────────────────────────────────────────────────────────────

struct Texture {
    _tex: ID3D11Texture2D,
    srv:  ID3D11ShaderResourceView,
}

pub struct D3d11Renderer {
    device:        ID3D11Device,
    context:       ID3D11DeviceContext,
    vertex_shader: ID3D11VertexShader,
    pixel_shader:  ID3D11PixelShader,
    input_layout:  ID3D11InputLayout,
    constants:     ID3D11Buffer,
    blend:         ID3D11BlendState,
    raster:        ID3D11RasterizerState,
    sampler:       ID3D11SamplerState,
    vertex_buf:    Option<(ID3D11Buffer, usize)>,
    index_buf:     Option<(ID3D11Buffer, usize)>,
    textures:      HashMap<TextureId, Texture, RandomState>,
    next_texture:  usize,
    render_target: Option<ID3D11RenderTargetView>,
    display:       Vec2,
    font:          MetricFont,
}

fn compile(entry: windows::core::PCSTR, target: windows::core::PCSTR) -> Result<ID3DBlob, Dx11Error> {
    let mut blob: Option<ID3DBlob> = None;
    let mut errors: Option<ID3DBlob> = None;
    let result = unsafe {
        D3DCompile(
            SHADER.as_ptr() as *const _,
            SHADER.len(),
            None,
            None,
            None,
            entry,
            target,
            0,
            0,
            &mut blob,
            Some(&mut errors),
        )
    };
    if let Err(e) = result {
        let detail = errors
            .map(|b| unsafe { String::from_utf8_lossy(blob_bytes(&b)).into_owned() })
            .unwrap_or_else(|| hr(e));
        return Err(Dx11Error::Shader(detail));
    }
    blob.ok_or_else(|| Dx11Error::Shader("compiler returned no bytecode".to_owned()))
}

unsafe fn blob_bytes(blob: &ID3DBlob) -> &[u8] {
    std::slice::from_raw_parts(blob.GetBufferPointer() as *const u8, blob.GetBufferSize())
}

fn res<T>(what: &str, r: windows::core::Result<()>, out: Option<T>) -> Result<T, Dx11Error> {
    r.map_err(|e| Dx11Error::Resource(format!("{what}: {e}")))?;
    out.ok_or_else(|| Dx11Error::Resource(format!("{what}: no object returned")))
}

impl D3d11Renderer {
    pub fn new(device: &ID3D11Device, context: &ID3D11DeviceContext, display: Vec2) -> Result<Self, Dx11Error> {
        let vs_blob = compile(s!("vs_main"), s!("vs_4_0"))?;
        let ps_blob = compile(s!("ps_main"), s!("ps_4_0"))?;

        unsafe {
            let vs_bytes = blob_bytes(&vs_blob);
            let ps_bytes = blob_bytes(&ps_blob);

            let mut vs = None;
            let vertex_shader = res("vertex shader", device.CreateVertexShader(vs_bytes, None, Some(&mut vs)), vs)?;
            let mut ps = None;
            let pixel_shader = res("pixel shader", device.CreatePixelShader(ps_bytes, None, Some(&mut ps)), ps)?;

            let layout = [
                D3D11_INPUT_ELEMENT_DESC {
                    SemanticName:         s!("POSITION"),
                    SemanticIndex:        0,
                    Format:               DXGI_FORMAT_R32G32_FLOAT,
                    InputSlot:            0,
                    AlignedByteOffset:    0,
                    InputSlotClass:       D3D11_INPUT_PER_VERTEX_DATA,
                    InstanceDataStepRate: 0,
                },
                D3D11_INPUT_ELEMENT_DESC {
                    SemanticName:         s!("TEXCOORD"),
                    SemanticIndex:        0,
                    Format:               DXGI_FORMAT_R32G32_FLOAT,
                    InputSlot:            0,
                    AlignedByteOffset:    8,
                    InputSlotClass:       D3D11_INPUT_PER_VERTEX_DATA,
                    InstanceDataStepRate: 0,
                },
                D3D11_INPUT_ELEMENT_DESC {
                    SemanticName:         s!("COLOR"),
                    SemanticIndex:        0,
                    Format:               DXGI_FORMAT_R8G8B8A8_UNORM,
                    InputSlot:            0,
                    AlignedByteOffset:    16,
                    InputSlotClass:       D3D11_INPUT_PER_VERTEX_DATA,
                    InstanceDataStepRate: 0,
                },
            ];
            let mut il = None;
            let input_layout = res("input layout", device.CreateInputLayout(&layout, vs_bytes, Some(&mut il)), il)?;

            let cb_desc = D3D11_BUFFER_DESC {
                ByteWidth:      std::mem::size_of::<[[f32; 4]; 4]>() as u32,
                Usage:          D3D11_USAGE_DYNAMIC,
                BindFlags:      D3D11_BIND_CONSTANT_BUFFER.0 as u32,
                CPUAccessFlags: D3D11_CPU_ACCESS_WRITE.0 as u32,
                ..Default::default()
            };
            let mut cb = None;
            let constants = res("constant buffer", device.CreateBuffer(&cb_desc, None, Some(&mut cb)), cb)?;

            let mut blend_desc = D3D11_BLEND_DESC::default();
            blend_desc.RenderTarget[0] = D3D11_RENDER_TARGET_BLEND_DESC {
                BlendEnable:           BOOL(1),
                SrcBlend:              D3D11_BLEND_SRC_ALPHA,
                DestBlend:             D3D11_BLEND_INV_SRC_ALPHA,
                BlendOp:               D3D11_BLEND_OP_ADD,
                SrcBlendAlpha:         D3D11_BLEND_ONE,
                DestBlendAlpha:        D3D11_BLEND_INV_SRC_ALPHA,
                BlendOpAlpha:          D3D11_BLEND_OP_ADD,
                RenderTargetWriteMask: D3D11_COLOR_WRITE_ENABLE_ALL.0 as u8,
            };
            let mut bs = None;
            let blend = res("blend state", device.CreateBlendState(&blend_desc, Some(&mut bs)), bs)?;

            let raster_desc = D3D11_RASTERIZER_DESC {
                FillMode:        D3D11_FILL_SOLID,
                CullMode:        D3D11_CULL_NONE,
                ScissorEnable:   BOOL(1),
                DepthClipEnable: BOOL(1),
                ..Default::default()
            };
            let mut rs = None;
            let raster = res("rasterizer state", device.CreateRasterizerState(&raster_desc, Some(&mut rs)), rs)?;

            let sampler_desc = D3D11_SAMPLER_DESC {
                Filter:         D3D11_FILTER_MIN_MAG_MIP_LINEAR,
                AddressU:       D3D11_TEXTURE_ADDRESS_WRAP,
                AddressV:       D3D11_TEXTURE_ADDRESS_WRAP,
                AddressW:       D3D11_TEXTURE_ADDRESS_WRAP,
                ComparisonFunc: D3D11_COMPARISON_ALWAYS,
                ..Default::default()
            };
            let mut ss = None;
            let sampler = res("sampler", device.CreateSamplerState(&sampler_desc, Some(&mut ss)), ss)?;

            let mut this = Self {
                device:        device.clone(),
                context:       context.clone(),
                vertex_shader,
                pixel_shader,
                input_layout,
                constants,
                blend,
                raster,
                sampler,
                vertex_buf:    None,
                index_buf:     None,
                textures:      HashMap::with_hasher(RandomState::with_seeds(0, 0, 0, 0)),
                next_texture:  2,
                render_target: None,
                display,
                font:          MetricFont,
            };
            let white = this.upload(1, 1, &[255; 4])?;
            this.textures.insert(TextureId::WHITE, white);
            log::debug!("renderer ready");
            Ok(this)
        }
    }

    fn upload(&self, width: u32, height: u32, rgba: &[u8]) -> Result<Texture, Dx11Error> {
        if rgba.len() < (width * height * 4) as usize {
            return Err(Dx11Error::Resource(format!("texture {width}x{height}: {} bytes is too short", rgba.len())));
        }
        let desc = D3D11_TEXTURE2D_DESC {
            Width:      width,
            Height:     height,
            MipLevels:  1,
            ArraySize:  1,
            Format:     DXGI_FORMAT_R8G8B8A8_UNORM,
            SampleDesc: DXGI_SAMPLE_DESC { Count: 1, Quality: 0 },
            Usage:      D3D11_USAGE_DEFAULT,
            BindFlags:  D3D11_BIND_SHADER_RESOURCE.0 as u32,
            ..Default::default()
        };
        let init = D3D11_SUBRESOURCE_DATA {
            pSysMem:          rgba.as_ptr() as *const _,
            SysMemPitch:      width * 4,
            SysMemSlicePitch: 0,
        };
        unsafe {
            let mut t = None;
            let tex = res("texture", self.device.CreateTexture2D(&desc, Some(&init), Some(&mut t)), t)?;
            let mut v = None;
            let srv = res("shader resource view", self.device.CreateShaderResourceView(&tex, None, Some(&mut v)), v)?;
            Ok(Texture { _tex: tex, srv })
        }
    }

    /// Upload an RGBA bitmap and return its handle.
    pub fn load_texture(&mut self, width: u32, height: u32, rgba: &[u8]) -> Result<TextureId, Dx11Error> {
        let tex = self.upload(width, height, rgba)?;
        let id  = TextureId(self.next_texture);
        self.next_texture += 1;
        self.textures.insert(id, tex);
        log::debug!("texture {} created ({width}x{height})", id.0);
        Ok(id)
    }

    pub fn set_target(&mut self, rtv: Option<&ID3D11RenderTargetView>, display: Vec2) {
        if rtv.is_none() {
            unsafe { self.context.OMSetRenderTargets(None, None); }
        }
        self.render_target = rtv.cloned();
        self.display       = display;
    }

    fn dynamic_buffer(&self, bytes: usize, bind: D3D11_BIND_FLAG) -> Result<ID3D11Buffer, Dx11Error> {
        let desc = D3D11_BUFFER_DESC {
            ByteWidth:      bytes as u32,
            Usage:          D3D11_USAGE_DYNAMIC,
            BindFlags:      bind.0 as u32,
            CPUAccessFlags: D3D11_CPU_ACCESS_WRITE.0 as u32,
            ..Default::default()
        };
        let mut b = None;
        unsafe { res("dynamic buffer", self.device.CreateBuffer(&desc, None, Some(&mut b)), b) }
    }

    unsafe fn write(&self, buf: &ID3D11Buffer, bytes: &[u8]) -> Result<(), Dx11Error> {
        let mut mapped = D3D11_MAPPED_SUBRESOURCE::default();
        self.context
            .Map(buf, 0, D3D11_MAP_WRITE_DISCARD, 0, Some(&mut mapped))
            .map_err(|e| Dx11Error::Resource(format!("map: {e}")))?;
        std::ptr::copy_nonoverlapping(bytes.as_ptr(), mapped.pData as *mut u8, bytes.len());
        self.context.Unmap(buf, 0);
        Ok(())
    }

    pub fn clear(&self, color: [f32; 4]) {
        let Some(rtv) = &self.render_target else { return };
        unsafe {
            self.context.OMSetRenderTargets(Some(&[Some(rtv.clone())]), None);
            self.context.ClearRenderTargetView(rtv, &color);
        }
    }

    /// Upload and draw one frame's draw list.
    pub fn draw(&mut self, frame: &RenderFrame<'_>) -> Result<(), Dx11Error> {
        if frame.is_empty() || self.render_target.is_none() { return Ok(()); }
        let dl = frame.draw_list;

        if let Some(cap) = batch::grow(self.vertex_buf.as_ref().map_or(0, |b| b.1), dl.vtx_buf.len(), VERTEX_SLACK) {
            let buf = self.dynamic_buffer(cap * std::mem::size_of::<DrawVert>(), D3D11_BIND_VERTEX_BUFFER)?;
            self.vertex_buf = Some((buf, cap));
        }
        if let Some(cap) = batch::grow(self.index_buf.as_ref().map_or(0, |b| b.1), dl.idx_buf.len(), INDEX_SLACK) {
            let buf = self.dynamic_buffer(cap * std::mem::size_of::<u16>(), D3D11_BIND_INDEX_BUFFER)?;
            self.index_buf = Some((buf, cap));
        }
        let (Some((vb, _)), Some((ib, _))) = (&self.vertex_buf, &self.index_buf) else { return Ok(()) };

        unsafe {
            self.write(vb, bytemuck::cast_slice(&dl.vtx_buf))?;
            self.write(ib, bytemuck::cast_slice(&dl.idx_buf))?;
            self.write(&self.constants, bytemuck::cast_slice(&batch::ortho_projection(frame.display_size)))?;

            let ctx = &self.context;
            let viewport = D3D11_VIEWPORT {
                Width:    frame.display_size.x,
                Height:   frame.display_size.y,
                MaxDepth: 1.0,
                ..Default::default()
            };
            ctx.RSSetViewports(Some(&[viewport]));
            ctx.RSSetState(&self.raster);
            ctx.IASetInputLayout(&self.input_layout);
            let stride = std::mem::size_of::<DrawVert>() as u32;
            let offset = 0u32;
            ctx.IASetVertexBuffers(0, 1, Some(&Some(vb.clone())), Some(&stride), Some(&offset));
            ctx.IASetIndexBuffer(ib, DXGI_FORMAT_R16_UINT, 0);
            ctx.IASetPrimitiveTopology(D3D11_PRIMITIVE_TOPOLOGY_TRIANGLELIST);
            ctx.VSSetShader(&self.vertex_shader, None);
            ctx.VSSetConstantBuffers(0, Some(&[Some(self.constants.clone())]));
            ctx.PSSetShader(&self.pixel_shader, None);
            ctx.PSSetSamplers(0, Some(&[Some(self.sampler.clone())]));
            ctx.OMSetBlendState(&self.blend, Some(&[0.0; 4]), 0xffff_ffff);

            for cmd in &dl.cmd_buf {
                let Some((l, t, r, b)) = batch::scissor(cmd, frame.display_size) else { continue };
                ctx.RSSetScissorRects(Some(&[RECT { left: l, top: t, right: r, bottom: b }]));
                let tex = self.textures.get(&cmd.texture_id).or_else(|| {
                    log::trace!("texture {} unknown, drawing untextured", cmd.texture_id.0);
                    self.textures.get(&TextureId::WHITE)
                });
                if let Some(tex) = tex {
                    ctx.PSSetShaderResources(0, Some(&[Some(tex.srv.clone())]));
                }
                ctx.DrawIndexed(cmd.elem_count, cmd.idx_offset, cmd.vtx_offset as i32);
            }
        }
        Ok(())
    }
}

impl Renderer for D3d11Renderer {
    fn begin_frame(&mut self, clear: Color) {
        self.clear([clear.r * clear.a, clear.g * clear.a, clear.b * clear.a, clear.a]);
    }

    fn render(&mut self, frame: RenderFrame<'_>) {
        if let Err(e) = self.draw(&frame) {
            log::error!("draw failed: {e}");
        }
    }

    /// Presentation belongs to the swap chain owner, see [`D3d11Host`].
    fn end_frame(&mut self) {}

    fn create_texture(&mut self, width: u32, height: u32, rgba: &[u8]) -> TextureId {
        self.load_texture(width, height, rgba).unwrap_or_else(|e| {
            log::error!("{e}");
            TextureId::WHITE
        })
    }

    fn destroy_texture(&mut self, id: TextureId) {
        if id != TextureId::WHITE && self.textures.remove(&id).is_some() {
            log::debug!("texture {} released", id.0);
        }
    }

    fn display_size(&self) -> Vec2 { self.display }
    fn font_atlas(&self) -> &dyn FontAtlas { &self.font }
}

// ─── Host ────────────────────────────────────────────────────────────────────

/// Window, device and renderer. Fields drop renderer first, window last.
pub struct D3d11Host {
    renderer:  D3d11Renderer,
    resources: GraphicsResources<D3d11Factory>,
    factory:   D3d11Factory,
    config:    WindowConfig,
    window:    Window,
}

impl D3d11Host {
    pub fn new(config: WindowConfig) -> Result<Self, Dx11Error> {
        let window      = Window::create(&config)?;
        let mut factory = D3d11Factory::new(window.hwnd());
        let resources   = GraphicsResources::create(&mut factory)?;
        let (Some(device), Some(context)) = (resources.device(), resources.context()) else {
            return Err(Dx11Error::Device(DeviceError::Create("device missing after creation".to_owned())));
        };
        let mut renderer = D3d11Renderer::new(device, context, config.size())?;
        renderer.set_target(resources.render_target(), config.size());
        window.show();
        Ok(Self { renderer, resources, factory, config, window })
    }

    pub fn load_texture(&mut self, width: u32, height: u32, rgba: &[u8]) -> Result<TextureId, Dx11Error> {
        self.renderer.load_texture(width, height, rgba)
    }
}

impl Host for D3d11Host {
    fn pump(&mut self, ctx: &mut Context) -> Pump {
        let applied = events::apply(ctx, self.window.pump());
        if let Some((w, h)) = applied.resize {
            self.resources.request_resize(w, h);
        }
        if applied.quit { Pump::Quit } else { Pump::Continue }
    }

    fn prepare(&mut self) -> Result<(), Dx11Error> {
        let Some((w, h)) = self.resources.pending_resize() else { return Ok(()) };
        // Every view of the back buffer must be gone before ResizeBuffers.
        let display = self.renderer.display;
        self.renderer.set_target(None, display);
        self.resources.apply_pending_resize(&mut self.factory)?;
        self.renderer.set_target(self.resources.render_target(), Vec2::new(w as f32, h as f32));
        Ok(())
    }

    fn font(&self) -> &dyn FontAtlas { self.renderer.font_atlas() }

    fn display_size(&self) -> Vec2 { self.renderer.display_size() }

    fn present(&mut self, frame: RenderFrame<'_>) -> Result<(), Dx11Error> {
        self.renderer.clear(self.config.premultiplied_clear());
        self.renderer.draw(&frame)?;
        let Some(sc) = self.resources.swap_chain() else { return Ok(()) };
        unsafe {
            sc.Present(self.config.sync_interval(), DXGI_PRESENT(0))
                .ok()
                .map_err(|e| Dx11Error::Present(hr(e)))
        }
    }
}

impl Drop for D3d11Host {
    fn drop(&mut self) {
        self.renderer.set_target(None, Vec2::ZERO);
        unsafe { self.renderer.context.ClearState(); }
        log::info!("shutting down");
    }
}
