//! GLSL shader sources for the Phong-Blinn program pair.
//!
//! Shader text is data, not logic: the external renderer compiles and
//! links these sources, binds the declared attributes/uniforms, and issues
//! draws. The names below form its contract — keep them stable.
//!
//! | kind      | names |
//! |-----------|-------|
//! | attribute | `position`, `normal` (vec3), `uvCoord` (vec2) |
//! | uniform (vertex) | `lightPosition` (vec3), `projectionMatrix`, `viewMatrix`, `modelMatrix` (mat4), `normalMatrix` (mat3) |
//! | uniform (fragment) | `ka`, `kd`, `ks`, `lightIntensity` (vec3), `shininess` (float), `uTexture` (sampler2D), `hasTexture` (bool) |
//! | varying   | `vTexCoord` (vec2), `vNormal`, `vPosition`, `vLightPosition` (vec3) |
//!
//! Lighting is computed in eye space. The `normalMatrix` uniform is the
//! inverse-transpose of the model-view matrix, supplied by the renderer so
//! normals stay correct under non-uniform scale.

/// Vertex stage source.
///
/// Transforms the position through the model/view/projection chain,
/// carries the normal through the normal matrix, moves the light into eye
/// space, and passes the UV coordinate through unchanged.
pub const VERTEX_SHADER: &str = "
precision mediump float;
attribute vec3 position, normal;
attribute vec2 uvCoord;
uniform vec3 lightPosition;
uniform mat4 projectionMatrix, viewMatrix, modelMatrix;
uniform mat3 normalMatrix;
varying vec2 vTexCoord;
varying vec3 vNormal;
varying vec3 vPosition;
varying vec3 vLightPosition;

void main() {
  vTexCoord = uvCoord;
  vNormal = normalize(normalMatrix * normal);
  vec4 posEye = viewMatrix * modelMatrix * vec4(position, 1.0);
  vPosition = posEye.xyz;
  vec4 lightEye = viewMatrix * vec4(lightPosition, 1.0);
  vLightPosition = lightEye.xyz;
  gl_Position = projectionMatrix * posEye;
}
";

/// Fragment stage source.
///
/// Phong-Blinn shading: ambient plus distance-attenuated Lambert diffuse
/// and Blinn half-vector specular, with attenuation `1 / d²`. When
/// `hasTexture` is set, the lit color is modulated by the texture's RGB
/// and the output alpha is the texture's alpha; otherwise alpha is 1.
pub const FRAGMENT_SHADER: &str = "
precision mediump float;
uniform vec3 ka, kd, ks, lightIntensity;
uniform float shininess;
uniform sampler2D uTexture;
uniform bool hasTexture;
varying vec2 vTexCoord;
varying vec3 vNormal;
varying vec3 vPosition;
varying vec3 vLightPosition;

void main() {
  vec3 N = normalize(vNormal);
  vec3 Lvec = vLightPosition - vPosition;
  float d = length(Lvec);
  vec3 L = normalize(Lvec);
  vec3 V = normalize(-vPosition);
  vec3 H = normalize(L + V);
  float att = 1.0 / (d * d);
  vec3 ambient = ka * lightIntensity;
  vec3 diffuse = kd * lightIntensity * max(dot(N, L), 0.0) * att;
  vec3 specular = ks * lightIntensity * pow(max(dot(N, H), 0.0), shininess) * att;
  vec3 color = ambient + diffuse + specular;

  if (hasTexture) {
    vec4 texColor = texture2D(uTexture, vTexCoord);
    color *= texColor.rgb;
    gl_FragColor = vec4(color, texColor.a);
  } else {
    gl_FragColor = vec4(color, 1.0);
  }
}
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_stage_declares_contract_names() {
        for name in [
            "attribute vec3 position, normal;",
            "attribute vec2 uvCoord;",
            "uniform vec3 lightPosition;",
            "uniform mat4 projectionMatrix, viewMatrix, modelMatrix;",
            "uniform mat3 normalMatrix;",
            "varying vec2 vTexCoord;",
            "varying vec3 vNormal;",
            "varying vec3 vPosition;",
            "varying vec3 vLightPosition;",
        ] {
            assert!(VERTEX_SHADER.contains(name), "missing {name:?}");
        }
    }

    #[test]
    fn fragment_stage_declares_contract_names() {
        for name in [
            "uniform vec3 ka, kd, ks, lightIntensity;",
            "uniform float shininess;",
            "uniform sampler2D uTexture;",
            "uniform bool hasTexture;",
        ] {
            assert!(FRAGMENT_SHADER.contains(name), "missing {name:?}");
        }
    }

    #[test]
    fn fragment_stage_keeps_lighting_formula() {
        // Inverse-square attenuation applied to diffuse and specular,
        // Blinn half-vector, texture modulation preserving texture alpha.
        assert!(FRAGMENT_SHADER.contains("float att = 1.0 / (d * d);"));
        assert!(FRAGMENT_SHADER.contains("max(dot(N, L), 0.0) * att"));
        assert!(FRAGMENT_SHADER.contains("pow(max(dot(N, H), 0.0), shininess) * att"));
        assert!(FRAGMENT_SHADER.contains("vec4(color, texColor.a)"));
        assert!(FRAGMENT_SHADER.contains("vec4(color, 1.0)"));
    }

    #[test]
    fn varyings_match_across_stages() {
        for varying in [
            "varying vec2 vTexCoord;",
            "varying vec3 vNormal;",
            "varying vec3 vPosition;",
            "varying vec3 vLightPosition;",
        ] {
            assert!(VERTEX_SHADER.contains(varying));
            assert!(FRAGMENT_SHADER.contains(varying));
        }
    }
}
