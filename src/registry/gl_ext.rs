// glfetch/src/registry/gl_ext.rs
//
//! The extension table.
//!
//! One row per extension the loader knows how to handle: the advertised
//! name and the commands the extension adds. Rows with an empty command
//! list are pure capability flags (`GL_ARB_imaging` and friends); loading
//! them records availability and resolves nothing.

use crate::registry::{extensions, Extension};

pub static EXTENSIONS: &[Extension] = extensions![
    "GL_ARB_ES2_compatibility" => [
        "glClearDepthf",
        "glDepthRangef",
        "glGetShaderPrecisionFormat",
        "glReleaseShaderCompiler",
        "glShaderBinary",
    ],
    "GL_ARB_ES3_compatibility" => [],
    "GL_ARB_arrays_of_arrays" => [],
    "GL_ARB_base_instance" => [
        "glDrawArraysInstancedBaseInstance",
        "glDrawElementsInstancedBaseInstance",
        "glDrawElementsInstancedBaseVertexBaseInstance",
    ],
    "GL_ARB_blend_func_extended" => [
        "glBindFragDataLocationIndexed",
        "glGetFragDataIndex",
    ],
    "GL_ARB_clear_buffer_object" => [
        "glClearBufferData",
        "glClearBufferSubData",
    ],
    "GL_ARB_color_buffer_float" => ["glClampColorARB"],
    "GL_ARB_compatibility" => [],
    "GL_ARB_compressed_texture_pixel_storage" => [],
    "GL_ARB_compute_shader" => [
        "glDispatchCompute",
        "glDispatchComputeIndirect",
    ],
    "GL_ARB_conservative_depth" => [],
    "GL_ARB_copy_buffer" => ["glCopyBufferSubData"],
    "GL_ARB_copy_image" => ["glCopyImageSubData"],
    "GL_ARB_debug_output" => [
        "glDebugMessageCallbackARB",
        "glDebugMessageControlARB",
        "glDebugMessageInsertARB",
        "glGetDebugMessageLogARB",
    ],
    "GL_ARB_depth_buffer_float" => [],
    "GL_ARB_depth_clamp" => [],
    "GL_ARB_draw_buffers_blend" => [
        "glBlendEquationSeparateiARB",
        "glBlendEquationiARB",
        "glBlendFuncSeparateiARB",
        "glBlendFunciARB",
    ],
    "GL_ARB_draw_elements_base_vertex" => [
        "glDrawElementsBaseVertex",
        "glDrawElementsInstancedBaseVertex",
        "glDrawRangeElementsBaseVertex",
        "glMultiDrawElementsBaseVertex",
    ],
    "GL_ARB_draw_indirect" => [
        "glDrawArraysIndirect",
        "glDrawElementsIndirect",
    ],
    "GL_ARB_draw_instanced" => [
        "glDrawArraysInstancedARB",
        "glDrawElementsInstancedARB",
    ],
    "GL_ARB_explicit_attrib_location" => [],
    "GL_ARB_explicit_uniform_location" => [],
    "GL_ARB_fragment_coord_conventions" => [],
    "GL_ARB_fragment_layer_viewport" => [],
    "GL_ARB_framebuffer_no_attachments" => [
        "glFramebufferParameteri",
        "glGetFramebufferParameteriv",
    ],
    "GL_ARB_framebuffer_object" => [
        "glBindFramebuffer",
        "glBindRenderbuffer",
        "glBlitFramebuffer",
        "glCheckFramebufferStatus",
        "glDeleteFramebuffers",
        "glDeleteRenderbuffers",
        "glFramebufferRenderbuffer",
        "glFramebufferTexture1D",
        "glFramebufferTexture2D",
        "glFramebufferTexture3D",
        "glFramebufferTextureLayer",
        "glGenFramebuffers",
        "glGenRenderbuffers",
        "glGenerateMipmap",
        "glGetFramebufferAttachmentParameteriv",
        "glGetRenderbufferParameteriv",
        "glIsFramebuffer",
        "glIsRenderbuffer",
        "glRenderbufferStorage",
        "glRenderbufferStorageMultisample",
    ],
    "GL_ARB_framebuffer_sRGB" => [],
    "GL_ARB_geometry_shader4" => [
        "glFramebufferTextureARB",
        "glFramebufferTextureFaceARB",
        "glFramebufferTextureLayerARB",
        "glProgramParameteriARB",
    ],
    "GL_ARB_get_program_binary" => [
        "glGetProgramBinary",
        "glProgramBinary",
        "glProgramParameteri",
    ],
    "GL_ARB_gpu_shader5" => [],
    "GL_ARB_gpu_shader_fp64" => [
        "glGetUniformdv",
        "glUniform1d",
        "glUniform1dv",
        "glUniform2d",
        "glUniform2dv",
        "glUniform3d",
        "glUniform3dv",
        "glUniform4d",
        "glUniform4dv",
        "glUniformMatrix2dv",
        "glUniformMatrix2x3dv",
        "glUniformMatrix2x4dv",
        "glUniformMatrix3dv",
        "glUniformMatrix3x2dv",
        "glUniformMatrix3x4dv",
        "glUniformMatrix4dv",
        "glUniformMatrix4x2dv",
        "glUniformMatrix4x3dv",
    ],
    "GL_ARB_half_float_pixel" => [],
    "GL_ARB_half_float_vertex" => [],
    "GL_ARB_imaging" => [],
    "GL_ARB_instanced_arrays" => ["glVertexAttribDivisorARB"],
    "GL_ARB_internalformat_query" => ["glGetInternalformativ"],
    "GL_ARB_internalformat_query2" => ["glGetInternalformati64v"],
    "GL_ARB_invalidate_subdata" => [
        "glInvalidateBufferData",
        "glInvalidateBufferSubData",
        "glInvalidateFramebuffer",
        "glInvalidateSubFramebuffer",
        "glInvalidateTexImage",
        "glInvalidateTexSubImage",
    ],
    "GL_ARB_map_buffer_alignment" => [],
    "GL_ARB_map_buffer_range" => [
        "glFlushMappedBufferRange",
        "glMapBufferRange",
    ],
    "GL_ARB_multi_draw_indirect" => [
        "glMultiDrawArraysIndirect",
        "glMultiDrawElementsIndirect",
    ],
    "GL_ARB_multisample" => ["glSampleCoverageARB"],
    "GL_ARB_multitexture" => [
        "glActiveTextureARB",
        "glClientActiveTextureARB",
        "glMultiTexCoord1dARB",
        "glMultiTexCoord1dvARB",
        "glMultiTexCoord1fARB",
        "glMultiTexCoord1fvARB",
        "glMultiTexCoord1iARB",
        "glMultiTexCoord1ivARB",
        "glMultiTexCoord1sARB",
        "glMultiTexCoord1svARB",
        "glMultiTexCoord2dARB",
        "glMultiTexCoord2dvARB",
        "glMultiTexCoord2fARB",
        "glMultiTexCoord2fvARB",
        "glMultiTexCoord2iARB",
        "glMultiTexCoord2ivARB",
        "glMultiTexCoord2sARB",
        "glMultiTexCoord2svARB",
        "glMultiTexCoord3dARB",
        "glMultiTexCoord3dvARB",
        "glMultiTexCoord3fARB",
        "glMultiTexCoord3fvARB",
        "glMultiTexCoord3iARB",
        "glMultiTexCoord3ivARB",
        "glMultiTexCoord3sARB",
        "glMultiTexCoord3svARB",
        "glMultiTexCoord4dARB",
        "glMultiTexCoord4dvARB",
        "glMultiTexCoord4fARB",
        "glMultiTexCoord4fvARB",
        "glMultiTexCoord4iARB",
        "glMultiTexCoord4ivARB",
        "glMultiTexCoord4sARB",
        "glMultiTexCoord4svARB",
    ],
    "GL_ARB_occlusion_query" => [
        "glBeginQueryARB",
        "glDeleteQueriesARB",
        "glEndQueryARB",
        "glGenQueriesARB",
        "glGetQueryObjectivARB",
        "glGetQueryObjectuivARB",
        "glGetQueryivARB",
        "glIsQueryARB",
    ],
    "GL_ARB_occlusion_query2" => [],
    "GL_ARB_point_parameters" => [
        "glPointParameterfARB",
        "glPointParameterfvARB",
    ],
    "GL_ARB_point_sprite" => [],
    "GL_ARB_program_interface_query" => [
        "glGetProgramInterfaceiv",
        "glGetProgramResourceIndex",
        "glGetProgramResourceLocation",
        "glGetProgramResourceLocationIndex",
        "glGetProgramResourceName",
        "glGetProgramResourceiv",
    ],
    "GL_ARB_provoking_vertex" => ["glProvokingVertex"],
    "GL_ARB_robustness" => [
        "glGetGraphicsResetStatusARB",
        "glGetnCompressedTexImageARB",
        "glGetnTexImageARB",
        "glGetnUniformdvARB",
        "glGetnUniformfvARB",
        "glGetnUniformivARB",
        "glGetnUniformuivARB",
        "glReadnPixelsARB",
    ],
    "GL_ARB_sample_shading" => ["glMinSampleShadingARB"],
    "GL_ARB_sampler_objects" => [
        "glBindSampler",
        "glDeleteSamplers",
        "glGenSamplers",
        "glGetSamplerParameterIiv",
        "glGetSamplerParameterIuiv",
        "glGetSamplerParameterfv",
        "glGetSamplerParameteriv",
        "glIsSampler",
        "glSamplerParameterIiv",
        "glSamplerParameterIuiv",
        "glSamplerParameterf",
        "glSamplerParameterfv",
        "glSamplerParameteri",
        "glSamplerParameteriv",
    ],
    "GL_ARB_seamless_cube_map" => [],
    "GL_ARB_separate_shader_objects" => [
        "glActiveShaderProgram",
        "glBindProgramPipeline",
        "glCreateShaderProgramv",
        "glDeleteProgramPipelines",
        "glGenProgramPipelines",
        "glGetProgramPipelineInfoLog",
        "glGetProgramPipelineiv",
        "glIsProgramPipeline",
        "glProgramUniform1d",
        "glProgramUniform1dv",
        "glProgramUniform1f",
        "glProgramUniform1fv",
        "glProgramUniform1i",
        "glProgramUniform1iv",
        "glProgramUniform1ui",
        "glProgramUniform1uiv",
        "glProgramUniform2d",
        "glProgramUniform2dv",
        "glProgramUniform2f",
        "glProgramUniform2fv",
        "glProgramUniform2i",
        "glProgramUniform2iv",
        "glProgramUniform2ui",
        "glProgramUniform2uiv",
        "glProgramUniform3d",
        "glProgramUniform3dv",
        "glProgramUniform3f",
        "glProgramUniform3fv",
        "glProgramUniform3i",
        "glProgramUniform3iv",
        "glProgramUniform3ui",
        "glProgramUniform3uiv",
        "glProgramUniform4d",
        "glProgramUniform4dv",
        "glProgramUniform4f",
        "glProgramUniform4fv",
        "glProgramUniform4i",
        "glProgramUniform4iv",
        "glProgramUniform4ui",
        "glProgramUniform4uiv",
        "glProgramUniformMatrix2dv",
        "glProgramUniformMatrix2fv",
        "glProgramUniformMatrix2x3dv",
        "glProgramUniformMatrix2x3fv",
        "glProgramUniformMatrix2x4dv",
        "glProgramUniformMatrix2x4fv",
        "glProgramUniformMatrix3dv",
        "glProgramUniformMatrix3fv",
        "glProgramUniformMatrix3x2dv",
        "glProgramUniformMatrix3x2fv",
        "glProgramUniformMatrix3x4dv",
        "glProgramUniformMatrix3x4fv",
        "glProgramUniformMatrix4dv",
        "glProgramUniformMatrix4fv",
        "glProgramUniformMatrix4x2dv",
        "glProgramUniformMatrix4x2fv",
        "glProgramUniformMatrix4x3dv",
        "glProgramUniformMatrix4x3fv",
        "glUseProgramStages",
        "glValidateProgramPipeline",
    ],
    "GL_ARB_shader_atomic_counters" => ["glGetActiveAtomicCounterBufferiv"],
    "GL_ARB_shader_bit_encoding" => [],
    "GL_ARB_shader_image_load_store" => [
        "glBindImageTexture",
        "glMemoryBarrier",
    ],
    "GL_ARB_shader_objects" => [
        "glAttachObjectARB",
        "glCompileShaderARB",
        "glCreateProgramObjectARB",
        "glCreateShaderObjectARB",
        "glDeleteObjectARB",
        "glDetachObjectARB",
        "glGetActiveUniformARB",
        "glGetAttachedObjectsARB",
        "glGetHandleARB",
        "glGetInfoLogARB",
        "glGetObjectParameterfvARB",
        "glGetObjectParameterivARB",
        "glGetShaderSourceARB",
        "glGetUniformLocationARB",
        "glGetUniformfvARB",
        "glGetUniformivARB",
        "glLinkProgramARB",
        "glShaderSourceARB",
        "glUniform1fARB",
        "glUniform1fvARB",
        "glUniform1iARB",
        "glUniform1ivARB",
        "glUniform2fARB",
        "glUniform2fvARB",
        "glUniform2iARB",
        "glUniform2ivARB",
        "glUniform3fARB",
        "glUniform3fvARB",
        "glUniform3iARB",
        "glUniform3ivARB",
        "glUniform4fARB",
        "glUniform4fvARB",
        "glUniform4iARB",
        "glUniform4ivARB",
        "glUniformMatrix2fvARB",
        "glUniformMatrix3fvARB",
        "glUniformMatrix4fvARB",
        "glUseProgramObjectARB",
        "glValidateProgramARB",
    ],
    "GL_ARB_shader_storage_buffer_object" => ["glShaderStorageBlockBinding"],
    "GL_ARB_shader_subroutine" => [
        "glGetActiveSubroutineName",
        "glGetActiveSubroutineUniformName",
        "glGetActiveSubroutineUniformiv",
        "glGetProgramStageiv",
        "glGetSubroutineIndex",
        "glGetSubroutineUniformLocation",
        "glGetUniformSubroutineuiv",
        "glUniformSubroutinesuiv",
    ],
    "GL_ARB_shading_language_100" => [],
    "GL_ARB_shading_language_420pack" => [],
    "GL_ARB_shading_language_packing" => [],
    "GL_ARB_stencil_texturing" => [],
    "GL_ARB_sync" => [
        "glClientWaitSync",
        "glDeleteSync",
        "glFenceSync",
        "glGetInteger64v",
        "glGetSynciv",
        "glIsSync",
        "glWaitSync",
    ],
    "GL_ARB_tessellation_shader" => [
        "glPatchParameterfv",
        "glPatchParameteri",
    ],
    "GL_ARB_texture_border_clamp" => [],
    "GL_ARB_texture_buffer_object" => ["glTexBufferARB"],
    "GL_ARB_texture_buffer_object_rgb32" => [],
    "GL_ARB_texture_buffer_range" => ["glTexBufferRange"],
    "GL_ARB_texture_compression" => [
        "glCompressedTexImage1DARB",
        "glCompressedTexImage2DARB",
        "glCompressedTexImage3DARB",
        "glCompressedTexSubImage1DARB",
        "glCompressedTexSubImage2DARB",
        "glCompressedTexSubImage3DARB",
        "glGetCompressedTexImageARB",
    ],
    "GL_ARB_texture_compression_bptc" => [],
    "GL_ARB_texture_compression_rgtc" => [],
    "GL_ARB_texture_cube_map" => [],
    "GL_ARB_texture_cube_map_array" => [],
    "GL_ARB_texture_float" => [],
    "GL_ARB_texture_multisample" => [
        "glGetMultisamplefv",
        "glSampleMaski",
        "glTexImage2DMultisample",
        "glTexImage3DMultisample",
    ],
    "GL_ARB_texture_non_power_of_two" => [],
    "GL_ARB_texture_query_levels" => [],
    "GL_ARB_texture_rectangle" => [],
    "GL_ARB_texture_rg" => [],
    "GL_ARB_texture_rgb10_a2ui" => [],
    "GL_ARB_texture_storage" => [
        "glTexStorage1D",
        "glTexStorage2D",
        "glTexStorage3D",
    ],
    "GL_ARB_texture_storage_multisample" => [
        "glTexStorage2DMultisample",
        "glTexStorage3DMultisample",
    ],
    "GL_ARB_texture_swizzle" => [],
    "GL_ARB_texture_view" => ["glTextureView"],
    "GL_ARB_timer_query" => [
        "glGetQueryObjecti64v",
        "glGetQueryObjectui64v",
        "glQueryCounter",
    ],
    "GL_ARB_transform_feedback2" => [
        "glBindTransformFeedback",
        "glDeleteTransformFeedbacks",
        "glDrawTransformFeedback",
        "glGenTransformFeedbacks",
        "glIsTransformFeedback",
        "glPauseTransformFeedback",
        "glResumeTransformFeedback",
    ],
    "GL_ARB_transform_feedback3" => [
        "glBeginQueryIndexed",
        "glDrawTransformFeedbackStream",
        "glEndQueryIndexed",
        "glGetQueryIndexediv",
    ],
    "GL_ARB_transform_feedback_instanced" => [
        "glDrawTransformFeedbackInstanced",
        "glDrawTransformFeedbackStreamInstanced",
    ],
    "GL_ARB_transpose_matrix" => [
        "glLoadTransposeMatrixdARB",
        "glLoadTransposeMatrixfARB",
        "glMultTransposeMatrixdARB",
        "glMultTransposeMatrixfARB",
    ],
    "GL_ARB_uniform_buffer_object" => [
        "glBindBufferBase",
        "glBindBufferRange",
        "glGetActiveUniformBlockName",
        "glGetActiveUniformBlockiv",
        "glGetActiveUniformName",
        "glGetActiveUniformsiv",
        "glGetIntegeri_v",
        "glGetUniformBlockIndex",
        "glGetUniformIndices",
        "glUniformBlockBinding",
    ],
    "GL_ARB_vertex_array_bgra" => [],
    "GL_ARB_vertex_array_object" => [
        "glBindVertexArray",
        "glDeleteVertexArrays",
        "glGenVertexArrays",
        "glIsVertexArray",
    ],
    "GL_ARB_vertex_attrib_64bit" => [
        "glGetVertexAttribLdv",
        "glVertexAttribL1d",
        "glVertexAttribL1dv",
        "glVertexAttribL2d",
        "glVertexAttribL2dv",
        "glVertexAttribL3d",
        "glVertexAttribL3dv",
        "glVertexAttribL4d",
        "glVertexAttribL4dv",
        "glVertexAttribLPointer",
    ],
    "GL_ARB_vertex_attrib_binding" => [
        "glBindVertexBuffer",
        "glVertexAttribBinding",
        "glVertexAttribFormat",
        "glVertexAttribIFormat",
        "glVertexAttribLFormat",
        "glVertexBindingDivisor",
    ],
    "GL_ARB_vertex_buffer_object" => [
        "glBindBufferARB",
        "glBufferDataARB",
        "glBufferSubDataARB",
        "glDeleteBuffersARB",
        "glGenBuffersARB",
        "glGetBufferParameterivARB",
        "glGetBufferPointervARB",
        "glGetBufferSubDataARB",
        "glIsBufferARB",
        "glMapBufferARB",
        "glUnmapBufferARB",
    ],
    "GL_ARB_vertex_type_2_10_10_10_rev" => [
        "glVertexAttribP1ui",
        "glVertexAttribP1uiv",
        "glVertexAttribP2ui",
        "glVertexAttribP2uiv",
        "glVertexAttribP3ui",
        "glVertexAttribP3uiv",
        "glVertexAttribP4ui",
        "glVertexAttribP4uiv",
    ],
    "GL_ARB_viewport_array" => [
        "glDepthRangeArrayv",
        "glDepthRangeIndexed",
        "glGetDoublei_v",
        "glGetFloati_v",
        "glScissorArrayv",
        "glScissorIndexed",
        "glScissorIndexedv",
        "glViewportArrayv",
        "glViewportIndexedf",
        "glViewportIndexedfv",
    ],
    "GL_ATI_separate_stencil" => [
        "glStencilFuncSeparateATI",
        "glStencilOpSeparateATI",
    ],
    "GL_EXT_abgr" => [],
    "GL_EXT_blend_equation_separate" => ["glBlendEquationSeparateEXT"],
    "GL_EXT_blend_func_separate" => ["glBlendFuncSeparateEXT"],
    "GL_EXT_blend_minmax" => ["glBlendEquationEXT"],
    "GL_EXT_depth_bounds_test" => ["glDepthBoundsEXT"],
    "GL_EXT_direct_state_access" => [
        "glBindMultiTextureEXT",
        "glCompressedTextureImage1DEXT",
        "glCompressedTextureImage2DEXT",
        "glCompressedTextureImage3DEXT",
        "glCompressedTextureSubImage1DEXT",
        "glCompressedTextureSubImage2DEXT",
        "glCompressedTextureSubImage3DEXT",
        "glCopyTextureImage1DEXT",
        "glCopyTextureImage2DEXT",
        "glCopyTextureSubImage1DEXT",
        "glCopyTextureSubImage2DEXT",
        "glCopyTextureSubImage3DEXT",
        "glDisableClientStateIndexedEXT",
        "glEnableClientStateIndexedEXT",
        "glFramebufferDrawBufferEXT",
        "glFramebufferDrawBuffersEXT",
        "glFramebufferReadBufferEXT",
        "glGenerateTextureMipmapEXT",
        "glGetFramebufferParameterivEXT",
        "glGetNamedBufferParameterivEXT",
        "glGetNamedBufferPointervEXT",
        "glGetNamedBufferSubDataEXT",
        "glGetTextureImageEXT",
        "glGetTextureLevelParameterfvEXT",
        "glGetTextureLevelParameterivEXT",
        "glGetTextureParameterfvEXT",
        "glGetTextureParameterivEXT",
        "glMapNamedBufferEXT",
        "glMapNamedBufferRangeEXT",
        "glNamedBufferDataEXT",
        "glNamedBufferSubDataEXT",
        "glNamedFramebufferRenderbufferEXT",
        "glNamedFramebufferTexture1DEXT",
        "glNamedFramebufferTexture2DEXT",
        "glNamedFramebufferTexture3DEXT",
        "glNamedRenderbufferStorageEXT",
        "glTextureBufferEXT",
        "glTextureImage1DEXT",
        "glTextureImage2DEXT",
        "glTextureImage3DEXT",
        "glTextureParameterfEXT",
        "glTextureParameterfvEXT",
        "glTextureParameteriEXT",
        "glTextureParameterivEXT",
        "glTextureStorage1DEXT",
        "glTextureStorage2DEXT",
        "glTextureStorage3DEXT",
        "glTextureSubImage1DEXT",
        "glTextureSubImage2DEXT",
        "glTextureSubImage3DEXT",
        "glUnmapNamedBufferEXT",
    ],
    "GL_EXT_draw_buffers2" => [
        "glColorMaskIndexedEXT",
        "glDisableIndexedEXT",
        "glEnableIndexedEXT",
        "glGetBooleanIndexedvEXT",
        "glGetIntegerIndexedvEXT",
        "glIsEnabledIndexedEXT",
    ],
    "GL_EXT_draw_instanced" => [
        "glDrawArraysInstancedEXT",
        "glDrawElementsInstancedEXT",
    ],
    "GL_EXT_draw_range_elements" => ["glDrawRangeElementsEXT"],
    "GL_EXT_fog_coord" => [
        "glFogCoordPointerEXT",
        "glFogCoorddEXT",
        "glFogCoorddvEXT",
        "glFogCoordfEXT",
        "glFogCoordfvEXT",
    ],
    "GL_EXT_framebuffer_blit" => ["glBlitFramebufferEXT"],
    "GL_EXT_framebuffer_multisample" => ["glRenderbufferStorageMultisampleEXT"],
    "GL_EXT_framebuffer_object" => [
        "glBindFramebufferEXT",
        "glBindRenderbufferEXT",
        "glCheckFramebufferStatusEXT",
        "glDeleteFramebuffersEXT",
        "glDeleteRenderbuffersEXT",
        "glFramebufferRenderbufferEXT",
        "glFramebufferTexture1DEXT",
        "glFramebufferTexture2DEXT",
        "glFramebufferTexture3DEXT",
        "glGenFramebuffersEXT",
        "glGenRenderbuffersEXT",
        "glGenerateMipmapEXT",
        "glGetFramebufferAttachmentParameterivEXT",
        "glGetRenderbufferParameterivEXT",
        "glIsFramebufferEXT",
        "glIsRenderbufferEXT",
        "glRenderbufferStorageEXT",
    ],
    "GL_EXT_framebuffer_sRGB" => [],
    "GL_EXT_gpu_shader4" => [
        "glBindFragDataLocationEXT",
        "glGetFragDataLocationEXT",
        "glGetUniformuivEXT",
        "glUniform1uiEXT",
        "glUniform1uivEXT",
        "glUniform2uiEXT",
        "glUniform2uivEXT",
        "glUniform3uiEXT",
        "glUniform3uivEXT",
        "glUniform4uiEXT",
        "glUniform4uivEXT",
    ],
    "GL_EXT_multi_draw_arrays" => [
        "glMultiDrawArraysEXT",
        "glMultiDrawElementsEXT",
    ],
    "GL_EXT_packed_depth_stencil" => [],
    "GL_EXT_packed_float" => [],
    "GL_EXT_point_parameters" => [
        "glPointParameterfEXT",
        "glPointParameterfvEXT",
    ],
    "GL_EXT_provoking_vertex" => ["glProvokingVertexEXT"],
    "GL_EXT_secondary_color" => [
        "glSecondaryColor3bEXT",
        "glSecondaryColor3bvEXT",
        "glSecondaryColor3dEXT",
        "glSecondaryColor3dvEXT",
        "glSecondaryColor3fEXT",
        "glSecondaryColor3fvEXT",
        "glSecondaryColor3iEXT",
        "glSecondaryColor3ivEXT",
        "glSecondaryColor3sEXT",
        "glSecondaryColor3svEXT",
        "glSecondaryColor3ubEXT",
        "glSecondaryColor3ubvEXT",
        "glSecondaryColor3uiEXT",
        "glSecondaryColor3uivEXT",
        "glSecondaryColor3usEXT",
        "glSecondaryColor3usvEXT",
        "glSecondaryColorPointerEXT",
    ],
    "GL_EXT_separate_shader_objects" => [
        "glActiveProgramEXT",
        "glCreateShaderProgramEXT",
        "glUseShaderProgramEXT",
    ],
    "GL_EXT_stencil_two_side" => ["glActiveStencilFaceEXT"],
    "GL_EXT_texture3D" => [
        "glTexImage3DEXT",
        "glTexSubImage3DEXT",
    ],
    "GL_EXT_texture_array" => ["glFramebufferTextureLayerEXT"],
    "GL_EXT_texture_compression_s3tc" => [],
    "GL_EXT_texture_filter_anisotropic" => [],
    "GL_EXT_texture_integer" => [
        "glClearColorIiEXT",
        "glClearColorIuiEXT",
        "glGetTexParameterIivEXT",
        "glGetTexParameterIuivEXT",
        "glTexParameterIivEXT",
        "glTexParameterIuivEXT",
    ],
    "GL_EXT_texture_sRGB" => [],
    "GL_EXT_texture_snorm" => [],
    "GL_EXT_texture_swizzle" => [],
    "GL_EXT_timer_query" => [
        "glGetQueryObjecti64vEXT",
        "glGetQueryObjectui64vEXT",
    ],
    "GL_EXT_transform_feedback" => [
        "glBeginTransformFeedbackEXT",
        "glBindBufferBaseEXT",
        "glBindBufferOffsetEXT",
        "glBindBufferRangeEXT",
        "glEndTransformFeedbackEXT",
        "glGetTransformFeedbackVaryingEXT",
        "glTransformFeedbackVaryingsEXT",
    ],
    "GL_EXT_vertex_array" => [
        "glArrayElementEXT",
        "glColorPointerEXT",
        "glDrawArraysEXT",
        "glEdgeFlagPointerEXT",
        "glGetPointervEXT",
        "glIndexPointerEXT",
        "glNormalPointerEXT",
        "glTexCoordPointerEXT",
        "glVertexPointerEXT",
    ],
    "GL_KHR_debug" => [
        "glDebugMessageCallback",
        "glDebugMessageControl",
        "glDebugMessageInsert",
        "glGetDebugMessageLog",
        "glGetObjectLabel",
        "glGetObjectPtrLabel",
        "glGetPointerv",
        "glObjectLabel",
        "glObjectPtrLabel",
        "glPopDebugGroup",
        "glPushDebugGroup",
    ],
    "GL_KHR_texture_compression_astc_ldr" => [],
    "GL_NV_conditional_render" => [
        "glBeginConditionalRenderNV",
        "glEndConditionalRenderNV",
    ],
    "GL_NV_primitive_restart" => [
        "glPrimitiveRestartIndexNV",
        "glPrimitiveRestartNV",
    ],
];
